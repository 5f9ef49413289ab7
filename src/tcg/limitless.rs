use serde::Deserialize;
use std::collections::HashMap;

/// Type code used by basic energy lines
pub const ENERGY_MARKER: &str = "Energy";
/// Limitless set code that hosts basic energy art
pub const ENERGY_PACK: &str = "SVE";

/// Path segment and filename prefix for a type code that breaks the default layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackOverride {
    pub path_pack: String,
    pub filename_prefix: String,
}

impl PackOverride {
    pub fn new(path_pack: &str, filename_prefix: &str) -> Self {
        Self {
            path_pack: path_pack.to_string(),
            filename_prefix: filename_prefix.to_string(),
        }
    }
}

/// Immutable type code to override table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExceptionMapping {
    overrides: HashMap<String, PackOverride>,
}

impl Default for ExceptionMapping {
    fn default() -> Self {
        let mut overrides = HashMap::new();
        // Crown Zenith Galarian Gallery subset
        overrides.insert("CRZ-GG".to_string(), PackOverride::new("CRZ", "CRZ_GG"));
        Self { overrides }
    }
}

impl ExceptionMapping {
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Return a mapping with `other` layered on top of `self`
    pub fn merged(mut self, other: ExceptionMapping) -> Self {
        self.overrides.extend(other.overrides);
        self
    }

    pub fn get(&self, card_type: &str) -> Option<&PackOverride> {
        self.overrides.get(card_type)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUrls {
    pub page_url: String,
    pub card_img_url: String,
}

pub struct LimitlessApi;

impl LimitlessApi {
    fn get_image_base_url() -> &'static str {
        "https://limitlesstcg.nyc3.digitaloceanspaces.com/tpci/"
    }

    fn get_page_base_url() -> &'static str {
        "https://limitlesstcg.com/cards/"
    }
}

/// Build the card page and image URLs for a type code and series number
pub fn build_card_urls(exceptions: &ExceptionMapping, card_type: &str, series_num: &str) -> CardUrls {
    let (path_pack, filename) = match exceptions.get(card_type) {
        Some(ext) => (
            ext.path_pack.as_str(),
            format!("{}{}_R_EN.png", ext.filename_prefix, series_num),
        ),
        None => {
            let path_pack = if card_type == ENERGY_MARKER {
                ENERGY_PACK
            } else {
                card_type
            };
            (
                path_pack,
                format!("{}_{:0>3}_R_EN.png", path_pack, series_num),
            )
        }
    };

    CardUrls {
        page_url: format!(
            "{}{}/{}",
            LimitlessApi::get_page_base_url(),
            path_pack,
            series_num
        ),
        card_img_url: format!(
            "{}{}/{}",
            LimitlessApi::get_image_base_url(),
            path_pack,
            filename
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_set_is_zero_padded() {
        let urls = build_card_urls(&ExceptionMapping::default(), "PAF", "84");
        assert_eq!(urls.page_url, "https://limitlesstcg.com/cards/PAF/84");
        assert_eq!(
            urls.card_img_url,
            "https://limitlesstcg.nyc3.digitaloceanspaces.com/tpci/PAF/PAF_084_R_EN.png"
        );
    }

    #[test]
    fn exception_code_uses_override_without_padding() {
        let urls = build_card_urls(&ExceptionMapping::default(), "CRZ-GG", "6");
        assert_eq!(urls.page_url, "https://limitlesstcg.com/cards/CRZ/6");
        assert_eq!(
            urls.card_img_url,
            "https://limitlesstcg.nyc3.digitaloceanspaces.com/tpci/CRZ/CRZ_GG6_R_EN.png"
        );
    }

    #[test]
    fn energy_marker_maps_to_sve() {
        let urls = build_card_urls(&ExceptionMapping::default(), "Energy", "2");
        assert_eq!(urls.page_url, "https://limitlesstcg.com/cards/SVE/2");
        assert_eq!(
            urls.card_img_url,
            "https://limitlesstcg.nyc3.digitaloceanspaces.com/tpci/SVE/SVE_002_R_EN.png"
        );
    }

    #[test]
    fn long_series_numbers_are_not_truncated() {
        let urls = build_card_urls(&ExceptionMapping::default(), "SVI", "1234");
        assert!(urls.card_img_url.ends_with("/SVI/SVI_1234_R_EN.png"));
    }

    #[test]
    fn empty_mapping_treats_every_code_as_default() {
        let urls = build_card_urls(&ExceptionMapping::empty(), "CRZ-GG", "6");
        assert!(urls.card_img_url.ends_with("/CRZ-GG/CRZ-GG_006_R_EN.png"));
    }

    #[test]
    fn merged_mapping_overrides_defaults() {
        let extra: ExceptionMapping = serde_json::from_str(
            r#"{"CRZ-GG": {"path_pack": "CRZX", "filename_prefix": "X_"}, "SIT-TG": {"path_pack": "SIT", "filename_prefix": "SIT_TG"}}"#,
        )
        .unwrap();
        let mapping = ExceptionMapping::default().merged(extra);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("CRZ-GG"), Some(&PackOverride::new("CRZX", "X_")));
        let urls = build_card_urls(&mapping, "SIT-TG", "12");
        assert!(urls.card_img_url.ends_with("/SIT/SIT_TG12_R_EN.png"));
    }

    proptest! {
        #[test]
        fn default_branch_pads_to_three_digits(code in "[A-Z]{3}", n in 0u32..1000) {
            let series = n.to_string();
            let urls = build_card_urls(&ExceptionMapping::default(), &code, &series);
            let padded = format!("{:03}", n);
            let expected = format!("/{}_{}_R_EN.png", code, padded);
            prop_assert!(urls.card_img_url.ends_with(&expected));
            let expected_page = format!("/{}/{}", code, series);
            prop_assert!(urls.page_url.ends_with(&expected_page));
        }

        #[test]
        fn exception_branch_keeps_series_verbatim(n in 0u32..1000) {
            let series = n.to_string();
            let urls = build_card_urls(&ExceptionMapping::default(), "CRZ-GG", &series);
            let expected = format!("/CRZ_GG{}_R_EN.png", series);
            prop_assert!(urls.card_img_url.ends_with(&expected));
        }
    }
}
