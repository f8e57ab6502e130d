use serde::{Deserialize, Deserializer, Serialize};

/// Facility metadata printed in the header grid.
///
/// Every field is optional. Absent and empty values both render as a blank answer line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityInfo {
    /// Facility name.
    #[serde(deserialize_with = "text_value")]
    pub facility_name: Option<String>,
    /// Department.
    #[serde(deserialize_with = "text_value")]
    pub department: Option<String>,
    /// Ward.
    #[serde(deserialize_with = "text_value")]
    pub ward: Option<String>,
    /// Clinical section.
    #[serde(deserialize_with = "text_value")]
    pub section: Option<String>,
    /// Observation period number.
    #[serde(deserialize_with = "text_value")]
    pub period_number: Option<String>,
    /// Observation date as free text (the form suggests dd/mm/yy).
    #[serde(deserialize_with = "text_value")]
    pub date: Option<String>,
    /// Session number as free text.
    #[serde(deserialize_with = "text_value")]
    pub session_number: Option<String>,
    /// Observer initials.
    #[serde(deserialize_with = "text_value")]
    pub observer: Option<String>,
    /// Page number.
    #[serde(deserialize_with = "text_value")]
    pub page_number: Option<String>,
    /// Address.
    #[serde(deserialize_with = "text_value")]
    pub address: Option<String>,
}

impl FacilityInfo {
    /// The ten `(label, value)` pairs in grid order.
    ///
    /// Even indices go to the left column, odd indices to the right column.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 10] {
        fn v(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }

        [
            ("施設名:", v(&self.facility_name)),
            ("部局:", v(&self.department)),
            ("病棟:", v(&self.ward)),
            ("科:", v(&self.section)),
            ("期間番号:", v(&self.period_number)),
            ("日付 (dd/mm/yy):", v(&self.date)),
            ("セッション番号:", v(&self.session_number)),
            ("観察者 (initials):", v(&self.observer)),
            ("ページ№:", v(&self.page_number)),
            ("住所:", v(&self.address)),
        ]
    }
}

/// Accept a JSON string, number or bool as header text; `null` is absent.
fn text_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        UInt(u64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|v| match v {
        Repr::Text(s) => s,
        Repr::Int(n) => n.to_string(),
        Repr::UInt(n) => n.to_string(),
        Repr::Float(x) => x.to_string(),
        Repr::Bool(b) => b.to_string(),
    }))
}

/// One raw observation as received from the caller.
///
/// `timing` and `action` are not validated; values outside the known sets never match a
/// display bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationRecord {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Raw timing code, nominally `1..=5`.
    pub timing: Option<i64>,
    /// Raw action code, nominally one of `hand_sanitizer`, `hand_wash`, `no_action`.
    pub action: Option<String>,
}

impl ObservationRecord {
    /// Convenience constructor.
    pub fn new(timestamp: i64, timing: i64, action: Option<&str>) -> Self {
        Self {
            timestamp,
            timing: Some(timing),
            action: action.map(str::to_string),
        }
    }

    /// Known timing for this record, if any.
    pub fn known_timing(&self) -> Option<Timing> {
        self.timing.and_then(Timing::from_code)
    }

    /// Known action for this record, if any.
    pub fn known_action(&self) -> Option<Action> {
        self.action.as_deref().and_then(Action::from_code)
    }
}

/// Full input document: facility header plus observation records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    /// Header metadata.
    pub facility_info: FacilityInfo,
    /// Observation records in caller order.
    pub records: Vec<ObservationRecord>,
}

/// The five standardized hand-hygiene moments, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Timing {
    /// Before touching a patient.
    BeforePatientContact,
    /// Before a clean/aseptic procedure.
    BeforeAsepticProcedure,
    /// After body fluid exposure risk.
    AfterBodyFluidExposure,
    /// After touching a patient.
    AfterPatientContact,
    /// After touching patient surroundings.
    AfterPatientSurroundings,
}

impl Timing {
    /// All timings in row order.
    pub const ALL: [Timing; 5] = [
        Timing::BeforePatientContact,
        Timing::BeforeAsepticProcedure,
        Timing::AfterBodyFluidExposure,
        Timing::AfterPatientContact,
        Timing::AfterPatientSurroundings,
    ];

    /// Map a raw timing code to a known timing.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::BeforePatientContact),
            2 => Some(Self::BeforeAsepticProcedure),
            3 => Some(Self::AfterBodyFluidExposure),
            4 => Some(Self::AfterPatientContact),
            5 => Some(Self::AfterPatientSurroundings),
            _ => None,
        }
    }

    /// Raw code, `1..=5`.
    pub fn code(self) -> i64 {
        match self {
            Self::BeforePatientContact => 1,
            Self::BeforeAsepticProcedure => 2,
            Self::AfterBodyFluidExposure => 3,
            Self::AfterPatientContact => 4,
            Self::AfterPatientSurroundings => 5,
        }
    }

    /// Short label printed in the first table column.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::BeforePatientContact => "患者接触前",
            Self::BeforeAsepticProcedure => "清潔/無菌操作前",
            Self::AfterBodyFluidExposure => "体液曝露後",
            Self::AfterPatientContact => "患者接触後",
            Self::AfterPatientSurroundings => "患者周辺物品接触後",
        }
    }

    /// Long description of the moment.
    pub fn description(self) -> &'static str {
        match self {
            Self::BeforePatientContact => "患者に接触する前",
            Self::BeforeAsepticProcedure => "清潔/無菌操作の前",
            Self::AfterBodyFluidExposure => "体液曝露の可能性のある場合",
            Self::AfterPatientContact => "患者に接触した後",
            Self::AfterPatientSurroundings => "患者周辺物品に接触した後",
        }
    }
}

/// Hand-hygiene action observed at a timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Alcohol hand rub.
    HandSanitizer,
    /// Soap and water.
    HandWash,
    /// No hygiene performed.
    NoAction,
}

impl Action {
    /// All actions in display order.
    pub const ALL: [Action; 3] = [Action::HandSanitizer, Action::HandWash, Action::NoAction];

    /// Map a raw action code to a known action.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hand_sanitizer" => Some(Self::HandSanitizer),
            "hand_wash" => Some(Self::HandWash),
            "no_action" => Some(Self::NoAction),
            _ => None,
        }
    }

    /// Raw action code.
    pub fn code(self) -> &'static str {
        match self {
            Self::HandSanitizer => "hand_sanitizer",
            Self::HandWash => "hand_wash",
            Self::NoAction => "no_action",
        }
    }

    /// Label printed next to the checkbox glyph.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::HandSanitizer => "手指消毒",
            Self::HandWash => "手洗い",
            Self::NoAction => "実施なし",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
