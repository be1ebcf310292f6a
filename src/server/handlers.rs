use super::types::{
    DiagnosisResponse, DiseaseInfoResponse, DiseaseRequest, DrugInfoResponse, DrugRequest,
    ErrorResponse, SymptomRequest,
};
use crate::{Error, llm::Relay, prompts};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

pub async fn diagnose(
    State(state): State<AppState>,
    Json(request): Json<SymptomRequest>,
) -> Result<Json<DiagnosisResponse>, HandlerError> {
    info!("Received diagnosis request");
    debug!("Symptoms: {}", request.symptoms);

    let possible_diseases = state
        .relay
        .generate(&prompts::diagnosis(&request.symptoms))
        .await
        .map_err(|e| upstream_failure("diagnose", e))?;

    Ok(Json(DiagnosisResponse { possible_diseases }))
}

pub async fn drug_info(
    State(state): State<AppState>,
    Json(request): Json<DrugRequest>,
) -> Result<Json<DrugInfoResponse>, HandlerError> {
    info!("Received drug info request");
    debug!("Drug name: {}", request.drug_name);

    let drug_info = state
        .relay
        .generate(&prompts::drug_info(&request.drug_name))
        .await
        .map_err(|e| upstream_failure("drug-info", e))?;

    Ok(Json(DrugInfoResponse { drug_info }))
}

pub async fn disease_info(
    State(state): State<AppState>,
    Json(request): Json<DiseaseRequest>,
) -> Result<Json<DiseaseInfoResponse>, HandlerError> {
    info!("Received disease info request");
    debug!("Disease name: {}", request.disease_name);

    let disease_info = state
        .relay
        .generate(&prompts::disease_info(&request.disease_name))
        .await
        .map_err(|e| upstream_failure("disease-info", e))?;

    Ok(Json(DiseaseInfoResponse { disease_info }))
}

fn upstream_failure(endpoint: &str, e: Error) -> HandlerError {
    error!("Failed to process {} request: {}", endpoint, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}
