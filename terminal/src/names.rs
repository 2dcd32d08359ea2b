use rand::{seq::SliceRandom, Rng};

const BOT_NAMES: &[&str] = &[
    "Apple",
    "Orange",
    "Banana",
    "Coconut",
    "Watermelon",
    "Cherry",
    "Pear",
    "Mango",
    "Strawberry",
    "Kiwi",
    "Cantaloupe",
    "Pineapple",
    "Grapefruit",
    "Peach",
    "Grape",
    "Lemon",
];

/// `count` distinct bot names picked at random, like "Kiwi Bot".
pub fn bot_names<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let mut names = BOT_NAMES.to_vec();
    names.shuffle(rng);

    (0..count)
        .map(|index| {
            let name = names[index % names.len()];
            match index / names.len() {
                0 => format!("{name} Bot"),
                round => format!("{name} Bot {}", round + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn names_end_with_bot() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = bot_names(3, &mut rng);

        assert_eq!(names.len(), 3);
        for name in names {
            assert!(name.ends_with(" Bot"));
        }
    }

    #[test]
    fn names_stay_distinct_beyond_the_list() {
        let mut rng = StdRng::seed_from_u64(2);
        let names = bot_names(BOT_NAMES.len() + 3, &mut rng);

        let distinct = names.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), names.len());
    }
}
