//! Prompt templates for the three lookup endpoints.
//!
//! The caller's value is embedded verbatim.

pub fn diagnosis(symptoms: &str) -> String {
    format!(
        "Given the symptoms: {symptoms}, provide a **detailed medical diagnosis**.
Include:
- Possible diseases
- Causes
- Symptoms explanation
- Severity levels
- Treatment options
- Prevention tips
Format it clearly in 20 lines."
    )
}

pub fn drug_info(drug_name: &str) -> String {
    format!(
        "Provide detailed information about the drug **{drug_name}**:
- Purpose and medical use
- Dosage recommendations
- Side effects
- Alternative medications
- Precautions and warnings
- Drug interactions
Format it clearly in 20 lines."
    )
}

pub fn disease_info(disease_name: &str) -> String {
    format!(
        "Provide a **comprehensive guide** on **{disease_name}** including:
- Overview
- Symptoms & Stages
- Causes
- Diagnosis methods
- Medications
- Treatment options
- Lifestyle & diet recommendations
- Prevention measures
Format it clearly in 20 lines."
    )
}
