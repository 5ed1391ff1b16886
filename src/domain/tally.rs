use crate::domain::model::{AnimalRecord, Species, SpeciesCount};

/// Accepted records grouped by species.
///
/// Groups keep first-encounter order; members keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesTally {
    groups: Vec<(Species, Vec<AnimalRecord>)>,
}

impl SpeciesTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AnimalRecord>,
    {
        let mut tally = Self::new();
        for record in records {
            tally.record(record);
        }
        tally
    }

    pub fn record(&mut self, record: AnimalRecord) {
        match self.groups.iter_mut().find(|(species, _)| *species == record.species) {
            Some((_, members)) => members.push(record),
            None => self.groups.push((record.species, vec![record])),
        }
    }

    pub fn count(&self, species: Species) -> usize {
        self.members(species).len()
    }

    pub fn members(&self, species: Species) -> &[AnimalRecord] {
        self.groups
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    /// Species in the order they were first seen.
    pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
        self.groups.iter().map(|(species, _)| *species)
    }

    pub fn groups(&self) -> impl Iterator<Item = (Species, &[AnimalRecord])> {
        self.groups
            .iter()
            .map(|(species, members)| (*species, members.as_slice()))
    }

    pub fn counts(&self) -> Vec<SpeciesCount> {
        self.groups()
            .map(|(species, members)| SpeciesCount {
                species,
                count: members.len(),
            })
            .collect()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, members)| members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(species: Species, name: &str, age: u32) -> AnimalRecord {
        AnimalRecord {
            species,
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn test_empty_tally() {
        let tally = SpeciesTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.count(Species::Lion), 0);
        assert!(tally.members(Species::Lion).is_empty());
    }

    #[test]
    fn test_first_encounter_order() {
        let tally = SpeciesTally::from_records(vec![
            animal(Species::Tiger, "Shere Khan", 9),
            animal(Species::Bear, "Baloo", 12),
            animal(Species::Tiger, "Rajah", 3),
            animal(Species::Hyena, "Kiki", 4),
        ]);

        let order: Vec<Species> = tally.species().collect();
        assert_eq!(order, vec![Species::Tiger, Species::Bear, Species::Hyena]);
    }

    #[test]
    fn test_counts_match_members() {
        let tally = SpeciesTally::from_records(vec![
            animal(Species::Lion, "A", 1),
            animal(Species::Hyena, "B", 2),
            animal(Species::Lion, "C", 3),
        ]);

        assert_eq!(tally.count(Species::Lion), 2);
        assert_eq!(tally.count(Species::Hyena), 1);
        assert_eq!(tally.total(), 3);

        let names: Vec<&str> = tally
            .members(Species::Lion)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);

        assert_eq!(
            tally.counts(),
            vec![
                SpeciesCount { species: Species::Lion, count: 2 },
                SpeciesCount { species: Species::Hyena, count: 1 },
            ]
        );
    }
}
