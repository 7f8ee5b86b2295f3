use serde::{Deserialize, Serialize};

/// Move classification selected on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveType {
    Local,
    LongDistance,
    Commercial,
}

impl MoveType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "local" => Some(MoveType::Local),
            "long-distance" => Some(MoveType::LongDistance),
            "commercial" => Some(MoveType::Commercial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveType::Local => "local",
            MoveType::LongDistance => "long-distance",
            MoveType::Commercial => "commercial",
        }
    }
}

/// Property size selected on the quote form. Wire literals match the
/// public site exactly, digits and all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeSize {
    #[serde(rename = "studio")]
    Studio,
    #[serde(rename = "1-bedroom")]
    OneBedroom,
    #[serde(rename = "2-bedroom")]
    TwoBedroom,
    #[serde(rename = "3-bedroom")]
    ThreeBedroom,
    #[serde(rename = "4-bedroom")]
    FourBedroom,
    #[serde(rename = "5+bedroom")]
    FivePlusBedroom,
    #[serde(rename = "office")]
    Office,
    #[serde(rename = "warehouse")]
    Warehouse,
}

impl HomeSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "studio" => Some(HomeSize::Studio),
            "1-bedroom" => Some(HomeSize::OneBedroom),
            "2-bedroom" => Some(HomeSize::TwoBedroom),
            "3-bedroom" => Some(HomeSize::ThreeBedroom),
            "4-bedroom" => Some(HomeSize::FourBedroom),
            "5+bedroom" => Some(HomeSize::FivePlusBedroom),
            "office" => Some(HomeSize::Office),
            "warehouse" => Some(HomeSize::Warehouse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeSize::Studio => "studio",
            HomeSize::OneBedroom => "1-bedroom",
            HomeSize::TwoBedroom => "2-bedroom",
            HomeSize::ThreeBedroom => "3-bedroom",
            HomeSize::FourBedroom => "4-bedroom",
            HomeSize::FivePlusBedroom => "5+bedroom",
            HomeSize::Office => "office",
            HomeSize::Warehouse => "warehouse",
        }
    }
}

/// Where the customer heard about us. Optional marketing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    Google,
    Facebook,
    Referral,
    RepeatCustomer,
    Other,
}

impl LeadSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "google" => Some(LeadSource::Google),
            "facebook" => Some(LeadSource::Facebook),
            "referral" => Some(LeadSource::Referral),
            "repeat-customer" => Some(LeadSource::RepeatCustomer),
            "other" => Some(LeadSource::Other),
            _ => None,
        }
    }
}

/// A validated moving-quote request. Constructed only from a DTO that has
/// already passed field validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    pub move_type: MoveType,
    pub move_date: String,

    pub from_address: String,
    pub from_city: String,
    pub from_state: String,
    pub from_zip: String,

    pub to_address: String,
    pub to_city: String,
    pub to_state: String,
    pub to_zip: String,

    pub home_size: HomeSize,

    pub packing_service: bool,
    pub storage_service: bool,
    pub special_items: Option<String>,
    pub additional_notes: Option<String>,

    pub hear_about_us: Option<LeadSource>,
}

impl QuoteRequest {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A quote request that has been accepted: id assigned, estimate computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: String,
    pub request: QuoteRequest,
    pub estimated_cost: i64,
    pub created_at: String,
}
