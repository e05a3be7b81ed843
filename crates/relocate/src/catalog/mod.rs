//! Read-only reference tables: city analyses, job postings, visa routes, and
//! logistics providers. Nothing here is ever mutated at runtime.

mod data;
pub mod router;

use serde::Serialize;
use std::collections::BTreeMap;

pub use router::catalog_router;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAnalysis {
    pub key: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub cost_of_living_index: f64,
    pub average_rent: f64,
    pub average_salary: f64,
    pub climate_score: f64,
    pub job_market_score: f64,
    pub quality_of_life_score: f64,
    pub remote_work_friendliness: f64,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobOpportunity {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub remote_friendly: bool,
    pub salary_range: SalaryRange,
    pub required_skills: Vec<&'static str>,
    pub description: &'static str,
    pub application_url: &'static str,
}

impl JobOpportunity {
    /// Number of required skills present in `skills`, case-insensitively.
    pub fn skill_overlap(&self, skills: &[String]) -> usize {
        self.required_skills
            .iter()
            .filter(|required| {
                skills
                    .iter()
                    .any(|skill| skill.trim().eq_ignore_ascii_case(required))
            })
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisaRequirement {
    pub visa_type: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub processing_weeks: u32,
    pub documents: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsProvider {
    pub name: &'static str,
    pub service_types: Vec<&'static str>,
    pub regions: Vec<&'static str>,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub services: BTreeMap<&'static str, &'static str>,
}

/// Normalise a free-form city name to a catalog key: `"Peak District"` becomes
/// `"peak_district"`.
pub fn city_key(city: &str) -> String {
    city.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug)]
pub struct ReferenceCatalog {
    locations: Vec<LocationAnalysis>,
    jobs: Vec<JobOpportunity>,
    visas: Vec<VisaRequirement>,
    logistics: Vec<LogisticsProvider>,
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReferenceCatalog {
    pub fn standard() -> Self {
        Self {
            locations: data::locations(),
            jobs: data::jobs(),
            visas: data::visas(),
            logistics: data::logistics_providers(),
        }
    }

    pub fn location_analysis(&self, city: &str) -> Option<&LocationAnalysis> {
        let key = city_key(city);
        self.locations.iter().find(|analysis| analysis.key == key)
    }

    pub fn locations(&self) -> &[LocationAnalysis] {
        &self.locations
    }

    /// Job postings ordered by how many of `skills` they ask for. Ties keep
    /// catalog order; an empty skill list returns the catalog as-is.
    pub fn job_recommendations(&self, skills: &[String]) -> Vec<&JobOpportunity> {
        let mut ranked: Vec<(usize, &JobOpportunity)> = self
            .jobs
            .iter()
            .map(|job| (job.skill_overlap(skills), job))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().map(|(_, job)| job).collect()
    }

    pub fn visa_requirements(&self) -> &[VisaRequirement] {
        &self.visas
    }

    pub fn visa_requirement(&self, visa_type: &str) -> Option<&VisaRequirement> {
        self.visas
            .iter()
            .find(|visa| visa.visa_type.eq_ignore_ascii_case(visa_type.trim()))
    }

    pub fn logistics_providers(&self) -> &[LogisticsProvider] {
        &self.logistics
    }

    pub fn system_status(&self) -> SystemStatus {
        let services = [
            ("relocation_engine", "online"),
            ("progress_tracking", "online"),
            ("job_matching", "online"),
            ("location_analysis", "online"),
        ]
        .into_iter()
        .collect();

        SystemStatus {
            status: "operational",
            version: env!("CARGO_PKG_VERSION"),
            services,
        }
    }
}
