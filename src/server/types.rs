use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct DrugRequest {
    pub drug_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DiseaseRequest {
    pub disease_name: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    pub possible_diseases: String,
}

#[derive(Debug, Serialize)]
pub struct DrugInfoResponse {
    pub drug_info: String,
}

#[derive(Debug, Serialize)]
pub struct DiseaseInfoResponse {
    pub disease_info: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
