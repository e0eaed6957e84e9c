use serde_json::json;

use super::super::domain::{Scheme, SchemeCategory, SchemeId};

pub(super) fn standard_categories() -> Vec<SchemeCategory> {
    [
        (
            "agriculture",
            "Agriculture",
            "Schemes related to farming, crop insurance, and agricultural subsidies",
        ),
        (
            "education",
            "Education",
            "Scholarships, educational loans, and learning support schemes",
        ),
        (
            "healthcare",
            "Healthcare",
            "Health insurance, medical assistance, and wellness programs",
        ),
        (
            "employment",
            "Employment",
            "Job training, skill development, and employment assistance",
        ),
        (
            "housing",
            "Housing",
            "Housing assistance, home loans, and property-related schemes",
        ),
        (
            "women",
            "Women Empowerment",
            "Women-specific welfare, entrepreneurship, and safety schemes",
        ),
    ]
    .into_iter()
    .map(|(name, display_name, description)| SchemeCategory {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

struct SeedScheme {
    id: i64,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    ministry: &'static str,
    eligibility_criteria: serde_json::Value,
    benefits: &'static str,
    application_url: &'static str,
    form_file: &'static str,
}

impl SeedScheme {
    fn into_scheme(self) -> Scheme {
        Scheme {
            id: SchemeId(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            ministry: self.ministry.to_string(),
            eligibility_criteria: self.eligibility_criteria,
            benefits: self.benefits.to_string(),
            application_url: Some(self.application_url.to_string()),
            application_form_path: Some(format!("public/forms/{}", self.form_file)),
        }
    }
}

pub(super) fn standard_schemes() -> Vec<Scheme> {
    vec![
        SeedScheme {
            id: 1,
            name: "PM-KISAN Scheme",
            description: "Income support of ₹6,000 per year in three equal installments to all land holding farmer families.",
            category: "agriculture",
            ministry: "Ministry of Agriculture & Farmers Welfare",
            eligibility_criteria: json!({
                "maxIncome": 800000,
                "occupations": ["farmer"],
                "requiresKCC": true,
                "criteria": [
                    "Must be a land-holding farmer",
                    "Annual income should be below ₹8 lakh",
                    "Excluded: Institutional land holders, farmer families with one or more members as Government employee"
                ],
                "documents": ["Aadhaar Card", "Land Records", "Bank Account Details", "Income Certificate"],
                "notes": [
                    "Benefits transferred directly to bank accounts",
                    "Verification happens at local agricultural office"
                ]
            }),
            benefits: "Financial assistance of ₹6,000 per year in three equal installments to provide income support to land-holding farmer families to meet their agricultural and domestic needs.",
            application_url: "https://pmkisan.gov.in/",
            form_file: "pm_kisan_form.pdf",
        },
        SeedScheme {
            id: 2,
            name: "Post-Matric Scholarship",
            description: "Financial assistance to SC students studying at post-matriculation or post-secondary stage to enable them to complete their education.",
            category: "education",
            ministry: "Ministry of Social Justice & Empowerment",
            eligibility_criteria: json!({
                "maxIncome": 250000,
                "categories": ["sc"],
                "occupations": ["student"],
                "criteria": [
                    "Must belong to Scheduled Caste",
                    "Family income should be below ₹2.5 lakh per annum",
                    "Must be pursuing post-matriculation studies"
                ],
                "documents": [
                    "Caste Certificate",
                    "Income Certificate",
                    "Previous Year Marksheet",
                    "Institution Verification Form",
                    "Bank Account Details"
                ],
                "notes": [
                    "Apply through National Scholarship Portal",
                    "Renewal applications must be submitted each academic year"
                ]
            }),
            benefits: "Financial assistance covering tuition fees, maintenance allowance, book bank assistance for SC students to pursue post-matriculation education including professional, technical, and higher education.",
            application_url: "https://scholarships.gov.in/",
            form_file: "post_matric_scholarship_form.pdf",
        },
        SeedScheme {
            id: 3,
            name: "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana",
            description: "Health insurance coverage of ₹5 lakh per family per year for secondary and tertiary care hospitalization.",
            category: "healthcare",
            ministry: "Ministry of Health & Family Welfare",
            eligibility_criteria: json!({
                "requiresBPL": true,
                "criteria": [
                    "Families listed under Socio-Economic Caste Census (SECC) database",
                    "BPL families",
                    "Deprived rural families",
                    "Occupational categories of urban workers' families"
                ],
                "documents": [
                    "Aadhaar Card",
                    "SECC Database Listing Proof",
                    "Ration Card",
                    "Any Government Photo ID"
                ],
                "notes": [
                    "Verification through SECC database",
                    "Mobile number required for registration",
                    "Covers pre and post hospitalization expenses"
                ],
                "warnings": ["Need to verify SECC database"]
            }),
            benefits: "Cashless and paperless access to healthcare services for the beneficiary at the point of service. Health insurance coverage of ₹5 lakh per family per year for secondary and tertiary care hospitalization.",
            application_url: "https://pmjay.gov.in/",
            form_file: "ayushman_bharat_form.pdf",
        },
        SeedScheme {
            id: 4,
            name: "Pradhan Mantri Awas Yojana - Gramin",
            description: "Financial assistance for construction of pucca houses for rural households who are homeless or living in kutcha or dilapidated houses.",
            category: "housing",
            ministry: "Ministry of Rural Development",
            eligibility_criteria: json!({
                "residenceTypes": ["rural"],
                "maxIncome": 100000,
                "criteria": [
                    "Must be a rural household",
                    "Should be houseless or living in kutcha/dilapidated house",
                    "Should not have received housing assistance before",
                    "Land ownership required"
                ],
                "documents": [
                    "BPL Card/Income Certificate",
                    "Land Ownership Documents",
                    "Aadhaar Card",
                    "Bank Account Details"
                ],
                "notes": [
                    "Selection based on SECC 2011 database",
                    "Preference to marginalized groups",
                    "Fund transfer in installments based on construction progress"
                ],
                "warnings": ["Requires land ownership"]
            }),
            benefits: "Financial assistance of ₹1.20 lakh in plain areas and ₹1.30 lakh in hilly/difficult areas for construction of pucca houses with basic amenities like toilet, electricity connection, drinking water, etc.",
            application_url: "https://pmayg.nic.in/",
            form_file: "pmayg_form.pdf",
        },
        SeedScheme {
            id: 5,
            name: "Pradhan Mantri Ujjwala Yojana",
            description: "Free LPG connections to women from Below Poverty Line (BPL) households to provide clean cooking fuel and improve health conditions.",
            category: "women",
            ministry: "Ministry of Petroleum and Natural Gas",
            eligibility_criteria: json!({
                "gender": "female",
                "requiresBPL": true,
                "criteria": [
                    "Adult woman from a BPL household",
                    "No existing LPG connection in the household",
                    "Household should be deprived as per SECC data"
                ],
                "documents": ["BPL Card", "Aadhaar Card", "Bank Account Details", "Proof of Address"],
                "notes": [
                    "Security deposit for LPG cylinder is waived off",
                    "Can be availed at all LPG distributors",
                    "First refill and stove also provided in many cases"
                ]
            }),
            benefits: "Free LPG connection with financial assistance of ₹1,600 per connection. The connection includes a security deposit for one cylinder, pressure regulator, hose pipe, consumer card, and inspection charges.",
            application_url: "https://pmuy.gov.in/",
            form_file: "ujjwala_form.pdf",
        },
        SeedScheme {
            id: 6,
            name: "Saksham Scholarship for Differently Abled Students",
            description: "Financial assistance to differently-abled students to pursue technical education at diploma and degree level.",
            category: "education",
            ministry: "Ministry of Human Resource Development",
            eligibility_criteria: json!({
                "requiresDisabilityCert": true,
                "minAge": 16,
                "maxAge": 35,
                "criteria": [
                    "Must have disability certificate (40% or more disability)",
                    "Must be enrolled in diploma/degree level technical course",
                    "Annual family income should be less than ₹8 lakh"
                ],
                "documents": [
                    "Disability Certificate",
                    "Income Certificate",
                    "Educational Certificates",
                    "Institution Verification Form",
                    "Bank Account Details"
                ],
                "notes": [
                    "Apply through National Scholarship Portal",
                    "Tuition fee reimbursement up to ₹50,000 or actual, whichever is less",
                    "Maintenance allowance of ₹3,000 per month for 10 months"
                ]
            }),
            benefits: "Scholarship covers tuition fees and maintenance allowance. For hostellers: ₹3,000 per month for 10 months and for day scholars: ₹1,500 per month for 10 months.",
            application_url: "https://scholarships.gov.in/",
            form_file: "saksham_scholarship_form.pdf",
        },
        SeedScheme {
            id: 7,
            name: "Pradhan Mantri Kisan Maandhan Yojana",
            description: "Voluntary and contributory pension scheme for small and marginal farmers aged between 18 to 40 years.",
            category: "agriculture",
            ministry: "Ministry of Agriculture & Farmers Welfare",
            eligibility_criteria: json!({
                "minAge": 18,
                "maxAge": 40,
                "occupations": ["farmer"],
                "maxIncome": 200000,
                "criteria": [
                    "Small and marginal farmer (land holding up to 2 hectares)",
                    "Age between 18 to 40 years",
                    "Not covered under any other statutory social security scheme"
                ],
                "documents": ["Aadhaar Card", "Land Records", "Age Proof", "Bank Account Details"],
                "notes": [
                    "Monthly contribution ranges from ₹55 to ₹200 based on entry age",
                    "Central Government contributes equal amount",
                    "Pension amount is ₹3,000 per month after age 60"
                ]
            }),
            benefits: "Monthly pension of ₹3,000 after attaining the age of 60. In case of death of the beneficiary, the spouse is entitled to receive 50% of the pension as family pension.",
            application_url: "https://pmkmy.gov.in/",
            form_file: "kisan_maandhan_form.pdf",
        },
        SeedScheme {
            id: 8,
            name: "Deendayal Antyodaya Yojana - National Rural Livelihoods Mission",
            description: "Aims to reduce poverty by enabling poor households to access gainful self-employment and skilled wage employment opportunities.",
            category: "employment",
            ministry: "Ministry of Rural Development",
            eligibility_criteria: json!({
                "residenceTypes": ["rural"],
                "criteria": [
                    "Rural BPL households",
                    "Priority to SC/ST households",
                    "Women-headed households",
                    "Persons with disability",
                    "Landless laborers"
                ],
                "documents": ["BPL Card", "Aadhaar Card", "Bank Account Details", "Voter ID/Any Government ID"],
                "notes": [
                    "Implementation through women Self Help Groups (SHGs)",
                    "Training and capacity building provided",
                    "Interest subvention on loans up to ₹3 lakh"
                ]
            }),
            benefits: "Financial assistance for forming Self Help Groups, interest subvention on loans, revolving fund support, and community investment support. Skill development, training, and market linkages.",
            application_url: "https://aajeevika.gov.in/",
            form_file: "day_nrlm_form.pdf",
        },
    ]
    .into_iter()
    .map(SeedScheme::into_scheme)
    .collect()
}
