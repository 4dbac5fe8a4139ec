pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", habitpro_core::quotes::random_quote(&mut rand::thread_rng()));
    Ok(())
}
