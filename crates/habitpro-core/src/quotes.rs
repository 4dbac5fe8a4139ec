use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: [&str; 6] = [
    "Small steps, big change.",
    "Consistency beats intensity.",
    "You don’t need motivation, you need a system.",
    "Win the day, one habit at a time.",
    "Tiny gains compound into big wins.",
    "Discipline is remembering what you want.",
];

/// A motivational quote picked with `rng`.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn picks_from_the_list() {
        let mut rng = StepRng::new(0, 1);
        assert!(QUOTES.contains(&random_quote(&mut rng)));
        assert!(QUOTES.contains(&random_quote(&mut rand::thread_rng())));
    }
}
