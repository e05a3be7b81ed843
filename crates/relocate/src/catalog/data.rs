use super::{JobOpportunity, LocationAnalysis, LogisticsProvider, SalaryRange, VisaRequirement};

pub(super) fn locations() -> Vec<LocationAnalysis> {
    vec![
        LocationAnalysis {
            key: "phoenix",
            city: "Phoenix",
            state: "Arizona",
            country: "USA",
            cost_of_living_index: 103.2,
            average_rent: 1650.0,
            average_salary: 58000.0,
            climate_score: 7.5,
            job_market_score: 8.2,
            quality_of_life_score: 7.8,
            remote_work_friendliness: 8.5,
            pros: vec![
                "Low cost of living",
                "Growing tech scene",
                "Great weather",
                "No state income tax",
            ],
            cons: vec![
                "Very hot summers",
                "Limited public transport",
                "Water scarcity concerns",
            ],
        },
        LocationAnalysis {
            key: "peak_district",
            city: "Peak District",
            state: "Derbyshire",
            country: "UK",
            cost_of_living_index: 95.8,
            average_rent: 1200.0,
            average_salary: 45000.0,
            climate_score: 6.5,
            job_market_score: 7.0,
            quality_of_life_score: 9.2,
            remote_work_friendliness: 9.0,
            pros: vec![
                "Beautiful countryside",
                "High quality of life",
                "Strong remote work culture",
                "Close to major cities",
            ],
            cons: vec![
                "Limited local job market",
                "Weather can be unpredictable",
                "Higher housing costs in desirable areas",
            ],
        },
        LocationAnalysis {
            key: "austin",
            city: "Austin",
            state: "Texas",
            country: "USA",
            cost_of_living_index: 108.5,
            average_rent: 1850.0,
            average_salary: 72000.0,
            climate_score: 7.8,
            job_market_score: 9.1,
            quality_of_life_score: 8.5,
            remote_work_friendliness: 9.2,
            pros: vec![
                "Thriving tech scene",
                "No state income tax",
                "Great food culture",
                "Music scene",
            ],
            cons: vec!["Rising cost of living", "Traffic congestion", "Hot summers"],
        },
    ]
}

pub(super) fn jobs() -> Vec<JobOpportunity> {
    vec![
        JobOpportunity {
            id: "technova-senior-fullstack",
            title: "Senior Full Stack Developer",
            company: "TechNova Remote",
            location: "Remote (Austin, TX Hub)",
            remote_friendly: true,
            salary_range: SalaryRange {
                min: 95_000,
                max: 130_000,
            },
            required_skills: vec!["React", "Node.js", "Python", "AWS"],
            description: "Join our distributed team building next-gen SaaS platforms.",
            application_url: "https://technova.com/careers/senior-fullstack",
        },
        JobOpportunity {
            id: "designcraft-ux",
            title: "Remote UX Designer",
            company: "DesignCraft Studios",
            location: "Remote (Peak District Friendly)",
            remote_friendly: true,
            salary_range: SalaryRange {
                min: 65_000,
                max: 85_000,
            },
            required_skills: vec!["Figma", "User Research", "Prototyping"],
            description: "Design beautiful, intuitive experiences for global clients.",
            application_url: "https://designcraft.com/careers/ux-designer",
        },
        JobOpportunity {
            id: "cloudscale-devops",
            title: "DevOps Engineer",
            company: "CloudScale Systems",
            location: "Hybrid (Phoenix Office)",
            remote_friendly: true,
            salary_range: SalaryRange {
                min: 105_000,
                max: 140_000,
            },
            required_skills: vec!["Kubernetes", "Docker", "Terraform", "AWS"],
            description: "Build and maintain scalable cloud infrastructure.",
            application_url: "https://cloudscale.com/careers/devops",
        },
    ]
}

pub(super) fn visas() -> Vec<VisaRequirement> {
    vec![
        VisaRequirement {
            visa_type: "uk_skilled_worker",
            name: "Skilled Worker visa",
            country: "UK",
            processing_weeks: 3,
            documents: vec![
                "Certificate of sponsorship",
                "Valid passport",
                "Proof of English language ability",
                "Tuberculosis test results where required",
            ],
        },
        VisaRequirement {
            visa_type: "uk_global_talent",
            name: "Global Talent visa",
            country: "UK",
            processing_weeks: 8,
            documents: vec![
                "Endorsement letter",
                "Valid passport",
                "Evidence of achievements",
            ],
        },
        VisaRequirement {
            visa_type: "us_h1b",
            name: "H-1B Specialty Occupation",
            country: "USA",
            processing_weeks: 12,
            documents: vec![
                "Approved I-129 petition",
                "Valid passport",
                "Degree certificates",
                "DS-160 confirmation",
            ],
        },
    ]
}

pub(super) fn logistics_providers() -> Vec<LogisticsProvider> {
    vec![
        LogisticsProvider {
            name: "Atlas Relocation",
            service_types: vec!["full_service", "hybrid"],
            regions: vec!["USA", "UK"],
            rating: 4.6,
        },
        LogisticsProvider {
            name: "CrateShift",
            service_types: vec!["self_move", "hybrid"],
            regions: vec!["USA"],
            rating: 4.2,
        },
        LogisticsProvider {
            name: "Moorland Movers",
            service_types: vec!["full_service"],
            regions: vec!["UK"],
            rating: 4.4,
        },
    ]
}
