use super::super::domain::CategoricalField;

/// Immutable label → code table for one categorical field.
///
/// Entries are kept in presentation order; codes are the ones the model was
/// trained with and have nothing to do with that order.
#[derive(Debug)]
pub struct CategoryVocabulary {
    field: CategoricalField,
    entries: &'static [(&'static str, u8)],
}

impl CategoryVocabulary {
    const fn new(field: CategoricalField, entries: &'static [(&'static str, u8)]) -> Self {
        Self { field, entries }
    }

    pub fn field(&self) -> CategoricalField {
        self.field
    }

    pub fn code(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, code)| *code)
    }

    pub fn label(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(label, _)| *label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn entries(&self) -> &'static [(&'static str, u8)] {
        self.entries
    }

    /// First label in presentation order, used as the form default.
    pub fn default_label(&self) -> &'static str {
        self.entries.first().map(|(label, _)| *label).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static RAINFALL_PATTERN: CategoryVocabulary = CategoryVocabulary::new(
    CategoricalField::RainfallPattern,
    &[("moderate", 2), ("low", 1), ("high", 0)],
);

pub static SOIL_TYPE: CategoryVocabulary = CategoryVocabulary::new(
    CategoricalField::SoilType,
    &[
        ("sandy", 3),
        ("silty", 4),
        ("clay", 0),
        ("peaty", 2),
        ("loamy", 1),
    ],
);

pub static DRAINAGE_PROPERTIES: CategoryVocabulary = CategoryVocabulary::new(
    CategoricalField::DrainageProperties,
    &[("poor", 2), ("moderate", 1), ("good", 0)],
);

pub static CROP_TYPE: CategoryVocabulary = CategoryVocabulary::new(
    CategoricalField::CropType,
    &[
        ("rice", 2),
        ("wheat", 4),
        ("soybean", 3),
        ("cotton", 0),
        ("maize", 1),
    ],
);

pub static GROWTH_STAGE: CategoryVocabulary = CategoryVocabulary::new(
    CategoricalField::GrowthStage,
    &[
        ("flowering", 0),
        ("fruiting", 1),
        ("vegetative", 5),
        ("seedling", 4),
        ("reproductive", 3),
        ("maturity", 2),
    ],
);

pub fn vocabulary(field: CategoricalField) -> &'static CategoryVocabulary {
    match field {
        CategoricalField::RainfallPattern => &RAINFALL_PATTERN,
        CategoricalField::SoilType => &SOIL_TYPE,
        CategoricalField::DrainageProperties => &DRAINAGE_PROPERTIES,
        CategoricalField::CropType => &CROP_TYPE,
        CategoricalField::GrowthStage => &GROWTH_STAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_within_each_vocabulary() {
        for field in CategoricalField::ALL {
            let vocab = vocabulary(field);
            let codes: HashSet<u8> = vocab.entries().iter().map(|(_, code)| *code).collect();
            let labels: HashSet<&str> = vocab.labels().collect();
            assert_eq!(codes.len(), vocab.len(), "duplicate code in {field}");
            assert_eq!(labels.len(), vocab.len(), "duplicate label in {field}");
        }
    }

    #[test]
    fn vocabulary_lookup_matches_field() {
        for field in CategoricalField::ALL {
            assert_eq!(vocabulary(field).field(), field);
        }
    }

    #[test]
    fn default_label_is_first_presented() {
        assert_eq!(RAINFALL_PATTERN.default_label(), "moderate");
        assert_eq!(SOIL_TYPE.default_label(), "sandy");
        assert_eq!(GROWTH_STAGE.default_label(), "flowering");
    }
}
