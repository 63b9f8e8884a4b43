//! Taxonomic ranks
//!
//!     The rank vocabulary follows the GBIF name parser enumeration, restricted to the
//!     ranks that show up in practice. Rank tags are matched case-insensitively, and
//!     spaces, underscores and hyphens are interchangeable, so `[Infrageneric name]`,
//!     `[infrageneric_name]` and `[infrageneric-name]` all resolve to the same rank.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Domain,
    Superkingdom,
    Kingdom,
    Subkingdom,
    Infrakingdom,
    Superphylum,
    Phylum,
    Subphylum,
    Infraphylum,
    Superclass,
    Class,
    Subclass,
    Infraclass,
    Parvclass,
    Superorder,
    Order,
    Suborder,
    Infraorder,
    Parvorder,
    Superfamily,
    Family,
    Subfamily,
    Infrafamily,
    Supertribe,
    Tribe,
    Subtribe,
    Infratribe,
    SupragenericName,
    Genus,
    Subgenus,
    Infragenus,
    Section,
    Subsection,
    Series,
    Subseries,
    InfragenericName,
    SpeciesAggregate,
    Species,
    InfraspecificName,
    Grex,
    Subspecies,
    CultivarGroup,
    Convariety,
    InfrasubspecificName,
    Proles,
    Natio,
    Aberration,
    Morph,
    Variety,
    Subvariety,
    Form,
    Subform,
    Pathovar,
    Biovar,
    Chemovar,
    Morphovar,
    Phagovar,
    Serovar,
    Chemoform,
    FormaSpecialis,
    Cultivar,
    Strain,
    Other,
    Unranked,
}

impl Rank {
    /// All ranks, ordered from the highest to the lowest
    pub const ALL: &'static [Rank] = &[
        Rank::Domain,
        Rank::Superkingdom,
        Rank::Kingdom,
        Rank::Subkingdom,
        Rank::Infrakingdom,
        Rank::Superphylum,
        Rank::Phylum,
        Rank::Subphylum,
        Rank::Infraphylum,
        Rank::Superclass,
        Rank::Class,
        Rank::Subclass,
        Rank::Infraclass,
        Rank::Parvclass,
        Rank::Superorder,
        Rank::Order,
        Rank::Suborder,
        Rank::Infraorder,
        Rank::Parvorder,
        Rank::Superfamily,
        Rank::Family,
        Rank::Subfamily,
        Rank::Infrafamily,
        Rank::Supertribe,
        Rank::Tribe,
        Rank::Subtribe,
        Rank::Infratribe,
        Rank::SupragenericName,
        Rank::Genus,
        Rank::Subgenus,
        Rank::Infragenus,
        Rank::Section,
        Rank::Subsection,
        Rank::Series,
        Rank::Subseries,
        Rank::InfragenericName,
        Rank::SpeciesAggregate,
        Rank::Species,
        Rank::InfraspecificName,
        Rank::Grex,
        Rank::Subspecies,
        Rank::CultivarGroup,
        Rank::Convariety,
        Rank::InfrasubspecificName,
        Rank::Proles,
        Rank::Natio,
        Rank::Aberration,
        Rank::Morph,
        Rank::Variety,
        Rank::Subvariety,
        Rank::Form,
        Rank::Subform,
        Rank::Pathovar,
        Rank::Biovar,
        Rank::Chemovar,
        Rank::Morphovar,
        Rank::Phagovar,
        Rank::Serovar,
        Rank::Chemoform,
        Rank::FormaSpecialis,
        Rank::Cultivar,
        Rank::Strain,
        Rank::Other,
        Rank::Unranked,
    ];

    /// Canonical tag as written inside `[...]`
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Domain => "domain",
            Rank::Superkingdom => "superkingdom",
            Rank::Kingdom => "kingdom",
            Rank::Subkingdom => "subkingdom",
            Rank::Infrakingdom => "infrakingdom",
            Rank::Superphylum => "superphylum",
            Rank::Phylum => "phylum",
            Rank::Subphylum => "subphylum",
            Rank::Infraphylum => "infraphylum",
            Rank::Superclass => "superclass",
            Rank::Class => "class",
            Rank::Subclass => "subclass",
            Rank::Infraclass => "infraclass",
            Rank::Parvclass => "parvclass",
            Rank::Superorder => "superorder",
            Rank::Order => "order",
            Rank::Suborder => "suborder",
            Rank::Infraorder => "infraorder",
            Rank::Parvorder => "parvorder",
            Rank::Superfamily => "superfamily",
            Rank::Family => "family",
            Rank::Subfamily => "subfamily",
            Rank::Infrafamily => "infrafamily",
            Rank::Supertribe => "supertribe",
            Rank::Tribe => "tribe",
            Rank::Subtribe => "subtribe",
            Rank::Infratribe => "infratribe",
            Rank::SupragenericName => "suprageneric_name",
            Rank::Genus => "genus",
            Rank::Subgenus => "subgenus",
            Rank::Infragenus => "infragenus",
            Rank::Section => "section",
            Rank::Subsection => "subsection",
            Rank::Series => "series",
            Rank::Subseries => "subseries",
            Rank::InfragenericName => "infrageneric_name",
            Rank::SpeciesAggregate => "species_aggregate",
            Rank::Species => "species",
            Rank::InfraspecificName => "infraspecific_name",
            Rank::Grex => "grex",
            Rank::Subspecies => "subspecies",
            Rank::CultivarGroup => "cultivar_group",
            Rank::Convariety => "convariety",
            Rank::InfrasubspecificName => "infrasubspecific_name",
            Rank::Proles => "proles",
            Rank::Natio => "natio",
            Rank::Aberration => "aberration",
            Rank::Morph => "morph",
            Rank::Variety => "variety",
            Rank::Subvariety => "subvariety",
            Rank::Form => "form",
            Rank::Subform => "subform",
            Rank::Pathovar => "pathovar",
            Rank::Biovar => "biovar",
            Rank::Chemovar => "chemovar",
            Rank::Morphovar => "morphovar",
            Rank::Phagovar => "phagovar",
            Rank::Serovar => "serovar",
            Rank::Chemoform => "chemoform",
            Rank::FormaSpecialis => "forma_specialis",
            Rank::Cultivar => "cultivar",
            Rank::Strain => "strain",
            Rank::Other => "other",
            Rank::Unranked => "unranked",
        }
    }

    /// True for ranks above genus, whose names are single words
    pub fn is_suprageneric(self) -> bool {
        self < Rank::Genus
    }

    /// True for ranks below species
    pub fn is_infraspecific(self) -> bool {
        self > Rank::Species && self < Rank::Other
    }
}

/// Lowercases a rank tag and folds spaces and hyphens into underscores
pub fn normalize_rank_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rank '{0}'")]
pub struct UnknownRank(pub String);

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_rank_tag(s);
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.as_str() == tag)
            .ok_or_else(|| UnknownRank(s.trim().to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("species", Rank::Species)]
    #[case("SPECIES", Rank::Species)]
    #[case("Infrageneric name", Rank::InfragenericName)]
    #[case("infrageneric_name", Rank::InfragenericName)]
    #[case("forma-specialis", Rank::FormaSpecialis)]
    #[case(" genus ", Rank::Genus)]
    fn test_parse_rank(#[case] tag: &str, #[case] expected: Rank) {
        assert_eq!(tag.parse::<Rank>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_rank() {
        let err = "specie".parse::<Rank>().unwrap_err();
        assert_eq!(err, UnknownRank("specie".to_string()));
        assert_eq!(err.to_string(), "unknown rank 'specie'");
    }

    #[test]
    fn test_every_rank_round_trips_through_its_tag() {
        for rank in Rank::ALL {
            assert_eq!(rank.as_str().parse::<Rank>().unwrap(), *rank);
        }
    }

    #[test]
    fn test_rank_order() {
        assert!(Rank::Family.is_suprageneric());
        assert!(!Rank::Genus.is_suprageneric());
        assert!(Rank::Variety.is_infraspecific());
        assert!(!Rank::Species.is_infraspecific());
        assert!(!Rank::Unranked.is_infraspecific());
    }
}
