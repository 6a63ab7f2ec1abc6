use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level shape of `branches.json`: a single `branches` array.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchesDocument {
    pub branches: Vec<Branch>,
}

/// A branch record as it appears on the wire. Read-only after parse.
///
/// The boolean flags are tri-state: an absent field, an explicit `false`
/// and an explicit `true` all survive decoding. Absent merges with `false`
/// only when the flags are resolved during classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub branch_type: Option<i64>,
    #[serde(default)]
    pub is_corporate: Option<bool>,
    #[serde(default)]
    pub is_agency: Option<bool>,
    #[serde(default)]
    pub config: Option<BranchConfig>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub country: Country,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    #[serde(rename = "iso2Code", default)]
    pub iso2_code: String,
}

/// Optional per-branch configuration sub-object. The agency flag lives
/// here in one of the two supported input shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchConfig {
    #[serde(default)]
    pub is_agency_branch: Option<bool>,
}

impl Branch {
    /// Country code of the first address, or `""` for a branch with no
    /// addresses. An empty code never matches a non-empty reference entry.
    pub fn country_code(&self) -> &str {
        self.addresses
            .first()
            .map(|address| address.country.iso2_code.as_str())
            .unwrap_or("")
    }

    /// Corporate flag resolved to a concrete boolean: absent is false.
    pub fn corporate(&self) -> bool {
        self.is_corporate.unwrap_or(false)
    }

    /// Agency flag resolved to a concrete boolean. The nested
    /// `config.isAgencyBranch` shape wins when the sub-object carries the
    /// flag, otherwise the direct `isAgency` field applies; both absent
    /// resolves false.
    pub fn agency(&self) -> bool {
        self.config
            .as_ref()
            .and_then(|config| config.is_agency_branch)
            .or(self.is_agency)
            .unwrap_or(false)
    }
}

/// Fixed enumeration mapping numeric branch-type codes to labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchType {
    Unknown,
    Downtown,
    Airport,
    RailwayStation,
    Port,
    Hotel,
}

impl BranchType {
    pub fn from_code(code: i64) -> Option<BranchType> {
        match code {
            0 => Some(BranchType::Unknown),
            1 => Some(BranchType::Downtown),
            2 => Some(BranchType::Airport),
            3 => Some(BranchType::RailwayStation),
            4 => Some(BranchType::Port),
            5 => Some(BranchType::Hotel),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BranchType::Unknown => "Unknown",
            BranchType::Downtown => "Downtown",
            BranchType::Airport => "Airport",
            BranchType::RailwayStation => "RailwayStation",
            BranchType::Port => "Port",
            BranchType::Hotel => "Hotel",
        }
    }

    /// Label for an optional code. A missing field resolves like code 0;
    /// a code outside the enumeration renders as an empty string, never an
    /// error.
    pub fn label_for(code: Option<i64>) -> &'static str {
        BranchType::from_code(code.unwrap_or(0))
            .map(BranchType::label)
            .unwrap_or("")
    }
}

/// Set of two-letter country codes loaded from the reference CSV.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCountrySet {
    codes: HashSet<String>,
}

impl ReferenceCountrySet {
    pub fn insert(&mut self, code: String) {
        self.codes.insert(code);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<String> for ReferenceCountrySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// How the reference country set is applied, if at all. One run uses at
/// most one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryFilter {
    /// No reference set is loaded or consulted.
    Off,
    /// Keep only branches whose country is in the set. Tested before the
    /// corporate/agency predicate.
    Allow,
    /// Drop branches whose country is in the set. Tested after the
    /// corporate/agency predicate.
    Deny,
}

/// Column set of the emitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
    /// Branch, Country
    Minimal,
    /// Branch, Name, Country
    Standard,
    /// Branch, Name, Country, BranchType, IsCorporate, IsAgency
    Full,
}

impl ReportShape {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            ReportShape::Minimal => &["Branch", "Country"],
            ReportShape::Standard => &["Branch", "Name", "Country"],
            ReportShape::Full => &[
                "Branch",
                "Name",
                "Country",
                "BranchType",
                "IsCorporate",
                "IsAgency",
            ],
        }
    }
}

/// Everything the extract stage hands to transform.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub branches: Vec<Branch>,
    pub reference: Option<ReferenceCountrySet>,
}

/// A surviving branch projected into report fields. Derived, immutable,
/// ordered by (country, branch_id) before load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub branch_id: i64,
    pub name: Option<String>,
    pub country: String,
    pub branch_type: &'static str,
    pub is_corporate: bool,
    pub is_agency: bool,
}

impl ReportRow {
    pub fn corporate_label(&self) -> &'static str {
        if self.is_corporate {
            "Corporate"
        } else {
            "Franchise"
        }
    }

    pub fn agency_label(&self) -> &'static str {
        if self.is_agency {
            "Agency"
        } else {
            "NotAgency"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_json(payload: &str) -> Branch {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn tri_state_flags_survive_decoding() {
        let absent = branch_json(r#"{"branchId": 1}"#);
        let explicit_false = branch_json(r#"{"branchId": 2, "isCorporate": false}"#);
        let explicit_true = branch_json(r#"{"branchId": 3, "isCorporate": true}"#);

        assert_eq!(absent.is_corporate, None);
        assert_eq!(explicit_false.is_corporate, Some(false));
        assert_eq!(explicit_true.is_corporate, Some(true));

        // Absent and explicit false only merge once resolved.
        assert!(!absent.corporate());
        assert!(!explicit_false.corporate());
        assert!(explicit_true.corporate());
    }

    #[test]
    fn agency_resolves_through_nested_config() {
        let nested = branch_json(r#"{"branchId": 1, "config": {"isAgencyBranch": true}}"#);
        let empty_config = branch_json(r#"{"branchId": 2, "config": {}}"#);
        let no_config = branch_json(r#"{"branchId": 3}"#);

        assert!(nested.agency());
        assert!(!empty_config.agency());
        assert!(!no_config.agency());
    }

    #[test]
    fn agency_direct_field_applies_without_config() {
        let direct = branch_json(r#"{"branchId": 1, "isAgency": true}"#);
        assert!(direct.agency());

        // A config object that carries the flag wins over the direct field.
        let both = branch_json(
            r#"{"branchId": 2, "isAgency": true, "config": {"isAgencyBranch": false}}"#,
        );
        assert!(!both.agency());
    }

    #[test]
    fn country_code_uses_first_address_only() {
        let branch = branch_json(
            r#"{"branchId": 1, "addresses": [
                {"country": {"iso2Code": "DE"}},
                {"country": {"iso2Code": "FR"}}
            ]}"#,
        );
        assert_eq!(branch.country_code(), "DE");

        let no_addresses = branch_json(r#"{"branchId": 2, "addresses": []}"#);
        assert_eq!(no_addresses.country_code(), "");
    }

    #[test]
    fn branch_type_lookup() {
        assert_eq!(BranchType::label_for(Some(2)), "Airport");
        assert_eq!(BranchType::label_for(Some(5)), "Hotel");
        // A missing field resolves like code 0.
        assert_eq!(BranchType::label_for(None), "Unknown");
        // Lookup miss is not an error.
        assert_eq!(BranchType::label_for(Some(99)), "");
        assert_eq!(BranchType::label_for(Some(-1)), "");
    }

    #[test]
    fn report_row_labels() {
        let row = ReportRow {
            branch_id: 7,
            name: None,
            country: "DE".to_string(),
            branch_type: "",
            is_corporate: true,
            is_agency: false,
        };
        assert_eq!(row.corporate_label(), "Corporate");
        assert_eq!(row.agency_label(), "NotAgency");

        let row = ReportRow {
            is_corporate: false,
            is_agency: true,
            ..row
        };
        assert_eq!(row.corporate_label(), "Franchise");
        assert_eq!(row.agency_label(), "Agency");
    }
}
