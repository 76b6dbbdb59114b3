use serde::{Deserialize, Serialize};

use super::error::PredictionError;

/// The numeric readings collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    AirTemp,
    ProcessTemp,
    RotSpeed,
    Torque,
    ToolWear,
}

impl SensorField {
    /// Validation order.
    pub const ALL: [SensorField; 5] = [
        Self::AirTemp,
        Self::ProcessTemp,
        Self::RotSpeed,
        Self::Torque,
        Self::ToolWear,
    ];

    /// Form input name and JSON key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AirTemp => "air_temp",
            Self::ProcessTemp => "process_temp",
            Self::RotSpeed => "rot_speed",
            Self::Torque => "torque",
            Self::ToolWear => "tool_wear",
        }
    }

    /// Name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AirTemp => "air temp",
            Self::ProcessTemp => "process temp",
            Self::RotSpeed => "rot speed",
            Self::Torque => "torque",
            Self::ToolWear => "tool wear",
        }
    }
}

/// Machine quality variant understood by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineType {
    Low,
    Medium,
    High,
}

impl MachineType {
    pub const ALL: [MachineType; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire code: `L`, `M` or `H`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::High => "H",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code.trim())
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorForm {
    pub air_temp: String,
    pub process_temp: String,
    pub rot_speed: String,
    pub torque: String,
    pub tool_wear: String,
    pub machine_type: String,
}

impl SensorForm {
    /// Build a form by looking up each input by name. Missing inputs read as empty.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut get = |name: &str| lookup(name).unwrap_or_default();
        SensorForm {
            air_temp: get(SensorField::AirTemp.key()),
            process_temp: get(SensorField::ProcessTemp.key()),
            rot_speed: get(SensorField::RotSpeed.key()),
            torque: get(SensorField::Torque.key()),
            tool_wear: get(SensorField::ToolWear.key()),
            machine_type: get("type"),
        }
    }

    pub fn value(&self, field: SensorField) -> &str {
        match field {
            SensorField::AirTemp => &self.air_temp,
            SensorField::ProcessTemp => &self.process_temp,
            SensorField::RotSpeed => &self.rot_speed,
            SensorField::Torque => &self.torque,
            SensorField::ToolWear => &self.tool_wear,
        }
    }

    /// Parse every numeric field. The first field that is empty, malformed or
    /// not finite aborts validation.
    pub fn validate(&self) -> Result<PredictionRequest, PredictionError> {
        let mut readings = [0.0; 5];
        for (slot, field) in readings.iter_mut().zip(SensorField::ALL) {
            *slot = parse_reading(self.value(field)).ok_or(PredictionError::InvalidField(field))?;
        }
        let [air_temp, process_temp, rot_speed, torque, tool_wear] = readings;
        Ok(PredictionRequest {
            air_temp,
            process_temp,
            rot_speed,
            torque,
            tool_wear,
            machine_type: self.machine_type.clone(),
        })
    }
}

fn parse_reading(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JSON body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub air_temp: f64,
    pub process_temp: f64,
    pub rot_speed: f64,
    pub torque: f64,
    pub tool_wear: f64,
    #[serde(rename = "type")]
    pub machine_type: String,
}

impl PredictionRequest {
    /// The machine type, if it is one the service knows.
    pub fn known_machine_type(&self) -> Option<MachineType> {
        MachineType::from_code(&self.machine_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SensorForm {
        SensorForm {
            air_temp: "298.1".into(),
            process_temp: "308.6".into(),
            rot_speed: "1551".into(),
            torque: " 42.8 ".into(),
            tool_wear: "0".into(),
            machine_type: "M".into(),
        }
    }

    #[test]
    fn valid_form_produces_request() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.air_temp, 298.1);
        assert_eq!(request.torque, 42.8);
        assert_eq!(request.tool_wear, 0.0);
        assert_eq!(request.known_machine_type(), Some(MachineType::Medium));
    }

    #[test]
    fn malformed_field_is_named() {
        let form = SensorForm {
            air_temp: "abc".into(),
            ..valid_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, PredictionError::InvalidField(SensorField::AirTemp));
        assert_eq!(err.to_string(), "Please enter a valid numerical value for air temp");
    }

    #[test]
    fn first_bad_field_wins() {
        let form = SensorForm {
            rot_speed: "".into(),
            tool_wear: "x".into(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            PredictionError::InvalidField(SensorField::RotSpeed)
        );
    }

    #[test]
    fn non_finite_values_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            let form = SensorForm {
                torque: raw.into(),
                ..valid_form()
            };
            assert_eq!(
                form.validate().unwrap_err(),
                PredictionError::InvalidField(SensorField::Torque),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn machine_type_is_not_validated() {
        let form = SensorForm {
            machine_type: "Q".into(),
            ..valid_form()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.machine_type, "Q");
        assert_eq!(request.known_machine_type(), None);
    }

    #[test]
    fn from_lookup_reads_inputs_by_name() {
        let form = SensorForm::from_lookup(|name| match name {
            "air_temp" => Some("300".to_string()),
            "type" => Some("L".to_string()),
            _ => None,
        });
        assert_eq!(form.air_temp, "300");
        assert_eq!(form.machine_type, "L");
        assert_eq!(form.torque, "");
    }

    #[test]
    fn request_serializes_type_key() {
        let request = valid_form().validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "M");
        assert_eq!(json["rot_speed"], 1551.0);
        assert!(json.get("machine_type").is_none());
    }

    #[test]
    fn machine_type_codes() {
        for t in MachineType::ALL {
            assert_eq!(MachineType::from_code(t.code()), Some(t));
        }
        assert_eq!(MachineType::High.label(), "High");
        assert_eq!(MachineType::from_code("l"), None);
    }
}
