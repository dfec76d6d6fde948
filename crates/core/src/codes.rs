//! Well-known terminology and identifier system URIs

/// LOINC observation and document codes
pub const LOINC: &str = "http://loinc.org";

/// RxNorm medication codes
pub const RXNORM: &str = "http://www.nlm.nih.gov/research/umls/rxnorm";

/// SNOMED CT clinical terms
pub const SNOMED_CT: &str = "http://snomed.info/sct";

/// CVX vaccine codes
pub const CVX: &str = "http://hl7.org/fhir/sid/cvx";

/// UCUM units of measure
pub const UCUM: &str = "http://unitsofmeasure.org";

/// Hospital medical record number identifier system
pub const MRN: &str = "http://hospital.org/mrn";
