use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[sqlx(rename_all = "kebab-case", type_name = "varchar")]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Enterprise,
    ApiBased, // pay per call
}

impl PricingModel {
    pub const ALL: [PricingModel; 5] = [
        PricingModel::Free,
        PricingModel::Freemium,
        PricingModel::Paid,
        PricingModel::Enterprise,
        PricingModel::ApiBased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Free => "free",
            PricingModel::Freemium => "freemium",
            PricingModel::Paid => "paid",
            PricingModel::Enterprise => "enterprise",
            PricingModel::ApiBased => "api-based",
        }
    }
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Draft => "draft",
            ToolStatus::Published => "published",
            ToolStatus::Archived => "archived",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_model_serializes_kebab_case() {
        let json = serde_json::to_string(&PricingModel::ApiBased).unwrap();
        assert_eq!(json, "\"api-based\"");

        let parsed: PricingModel = serde_json::from_str("\"freemium\"").unwrap();
        assert_eq!(parsed, PricingModel::Freemium);
    }

    #[test]
    fn as_str_matches_serde_names() {
        for model in PricingModel::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json.trim_matches('"'), model.as_str());
        }
    }
}
