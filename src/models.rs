use serde::{Deserialize, Serialize};

/// One row of the `doctors` table.
///
/// `id` is assigned by the store on insert. The text columns are nullable
/// because the service performs no input validation: a field missing from a
/// write payload is stored as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub specialty: Option<String>,
}

/// Write payload for create and update.
///
/// Deserialized leniently: unknown fields are ignored and missing fields
/// become `None`, which the backends bind as NULL parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorPayload {
    pub name: Option<String>,
    pub city: Option<String>,
    pub specialty: Option<String>,
}

/// Envelope for the list operation:
/// `{"status":"success","results":N,"data":{"doctors":[...]}}`
#[derive(Debug, Serialize)]
pub struct DoctorListResponse {
    pub status: &'static str,
    pub results: usize,
    pub data: DoctorListData,
}

#[derive(Debug, Serialize)]
pub struct DoctorListData {
    pub doctors: Vec<Doctor>,
}

impl DoctorListResponse {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            status: "success",
            results: doctors.len(),
            data: DoctorListData { doctors },
        }
    }
}

/// Envelope for single-doctor operations: `{"status":"success","data":{...}}`.
///
/// When no row is available the `doctor` key is omitted entirely, so a read
/// of a missing id answers 200 with `"data":{}` rather than a 404.
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub status: &'static str,
    pub data: DoctorData,
}

#[derive(Debug, Serialize)]
pub struct DoctorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Doctor>,
}

impl DoctorResponse {
    pub fn new(doctor: Option<Doctor>) -> Self {
        Self {
            status: "success",
            data: DoctorData { doctor },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_doctor_key_is_omitted() {
        let body = serde_json::to_value(DoctorResponse::new(None)).unwrap();

        assert_eq!(body["status"], "success");
        assert!(body["data"].as_object().unwrap().is_empty());
    }

    #[test]
    fn present_doctor_is_nested_under_data() {
        let doctor = Doctor {
            id: 7,
            name: Some("Ada".to_string()),
            city: Some("Boston".to_string()),
            specialty: Some("Cardiology".to_string()),
        };
        let body = serde_json::to_value(DoctorResponse::new(Some(doctor))).unwrap();

        assert_eq!(body["data"]["doctor"]["id"], 7);
        assert_eq!(body["data"]["doctor"]["name"], "Ada");
    }

    #[test]
    fn list_envelope_reports_row_count() {
        let doctors = vec![
            Doctor {
                id: 1,
                name: Some("Ada".to_string()),
                city: None,
                specialty: None,
            },
            Doctor {
                id: 2,
                name: None,
                city: Some("Boston".to_string()),
                specialty: None,
            },
        ];
        let body = serde_json::to_value(DoctorListResponse::new(doctors)).unwrap();

        assert_eq!(body["results"], 2);
        assert_eq!(body["data"]["doctors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn payload_tolerates_missing_and_unknown_fields() {
        let payload: DoctorPayload =
            serde_json::from_str(r#"{"name":"Ada","office":"3F"}"#).unwrap();

        assert_eq!(payload.name.as_deref(), Some("Ada"));
        assert!(payload.city.is_none());
        assert!(payload.specialty.is_none());
    }
}
