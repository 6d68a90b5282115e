use crate::api::Pokemon;

/// Ordering applied to the filtered card view.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum SortMode {
    #[default]
    Number,
    Name,
    Speed,
    BaseExp,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortMode::Number => "NUMBER",
            SortMode::Name => "NAME",
            SortMode::Speed => "SPEED",
            SortMode::BaseExp => "BASE EXP",
        };
        f.write_str(s)
    }
}

impl SortMode {
    /// Sort a filtered view in place. Speed and base experience sort
    /// descending (strongest first); missing values go last.
    pub fn apply(&self, cards: &mut [&Pokemon]) {
        match self {
            SortMode::Number => cards.sort_by_key(|p| p.id),
            SortMode::Name => cards.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::Speed => cards.sort_by_key(|p| std::cmp::Reverse(p.speed().unwrap_or(0))),
            SortMode::BaseExp => {
                cards.sort_by_key(|p| std::cmp::Reverse(p.base_experience.unwrap_or(0)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_name_and_number() {
        let b = Pokemon::sample(2, "bulbasaur");
        let c = Pokemon::sample(1, "charmander");
        let mut view: Vec<&Pokemon> = vec![&b, &c];

        SortMode::Name.apply(&mut view);
        assert_eq!(view[0].name, "bulbasaur");

        SortMode::Number.apply(&mut view);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn speed_sorts_descending_with_missing_last() {
        let mut slow = Pokemon::sample(1, "slowpoke");
        slow.set_speed(15);
        let mut fast = Pokemon::sample(2, "pikachu");
        fast.set_speed(90);
        let unknown = Pokemon::sample(3, "ditto");

        let mut view: Vec<&Pokemon> = vec![&slow, &unknown, &fast];
        SortMode::Speed.apply(&mut view);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["pikachu", "slowpoke", "ditto"]);
    }
}
