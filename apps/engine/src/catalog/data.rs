//! Builtin catalog records. Authored by hand; relevance scores, salaries,
//! and requirement lists are fixed editorial data, not computed values.

use crate::catalog::category::Category;
use crate::models::job::{DemandLevel, JobRecord};
use crate::models::resource::{ResourceRecord, ResourceType};

pub(super) fn jobs_for(category: Category) -> Vec<JobRecord> {
    match category {
        Category::Construction => vec![
            JobRecord {
                id: "construction-1".into(),
                title: "Construction Worker".into(),
                description: "General construction work including building, renovation, and maintenance.".into(),
                relevance_score: 95,
                requirements: vec![
                    "Physical fitness".into(),
                    "Safety awareness".into(),
                    "Basic tool usage".into(),
                ],
                average_salary: "$35,000 - $50,000".into(),
                demand_level: DemandLevel::High,
            },
            JobRecord {
                id: "construction-2".into(),
                title: "Maintenance Technician".into(),
                description: "Facility maintenance and repair work.".into(),
                relevance_score: 85,
                requirements: vec![
                    "Basic electrical knowledge".into(),
                    "Plumbing basics".into(),
                    "Problem-solving".into(),
                ],
                average_salary: "$40,000 - $55,000".into(),
                demand_level: DemandLevel::High,
            },
        ],
        Category::Cooking => vec![
            JobRecord {
                id: "cooking-1".into(),
                title: "Line Cook".into(),
                description: "Prepare food in restaurant kitchens following recipes and food safety standards.".into(),
                relevance_score: 90,
                requirements: vec![
                    "Food safety knowledge".into(),
                    "Speed and accuracy".into(),
                    "Team collaboration".into(),
                ],
                average_salary: "$30,000 - $40,000".into(),
                demand_level: DemandLevel::High,
            },
            JobRecord {
                id: "cooking-2".into(),
                title: "Kitchen Assistant".into(),
                description: "Support kitchen operations with food prep and cleaning.".into(),
                relevance_score: 85,
                requirements: vec![
                    "Basic food handling".into(),
                    "Cleanliness".into(),
                    "Following instructions".into(),
                ],
                average_salary: "$25,000 - $35,000".into(),
                demand_level: DemandLevel::High,
            },
        ],
        Category::Healthcare => vec![
            JobRecord {
                id: "healthcare-1".into(),
                title: "Certified Nursing Assistant (CNA)".into(),
                description: "Provide basic patient care under supervision of nurses.".into(),
                relevance_score: 85,
                requirements: vec![
                    "CNA certification".into(),
                    "Compassion".into(),
                    "Physical stamina".into(),
                ],
                average_salary: "$35,000 - $45,000".into(),
                demand_level: DemandLevel::High,
            },
            JobRecord {
                id: "healthcare-2".into(),
                title: "Home Health Aide".into(),
                description: "Assist elderly or disabled individuals with daily activities.".into(),
                relevance_score: 90,
                requirements: vec![
                    "First aid certification".into(),
                    "Patience".into(),
                    "Communication skills".into(),
                ],
                average_salary: "$30,000 - $40,000".into(),
                demand_level: DemandLevel::High,
            },
        ],
        Category::Teaching => vec![
            JobRecord {
                id: "teaching-1".into(),
                title: "Teaching Assistant".into(),
                description: "Support classroom teachers with instruction and student supervision.".into(),
                relevance_score: 80,
                requirements: vec![
                    "High school diploma".into(),
                    "Patience with children".into(),
                    "Communication skills".into(),
                ],
                average_salary: "$25,000 - $35,000".into(),
                demand_level: DemandLevel::Medium,
            },
            JobRecord {
                id: "teaching-2".into(),
                title: "Language Tutor".into(),
                description: "Provide one-on-one or small group language instruction.".into(),
                relevance_score: 95,
                requirements: vec![
                    "Fluency in multiple languages".into(),
                    "Teaching experience".into(),
                    "Cultural sensitivity".into(),
                ],
                average_salary: "$20 - $50 per hour".into(),
                demand_level: DemandLevel::Medium,
            },
        ],
        Category::Technology => vec![
            JobRecord {
                id: "tech-1".into(),
                title: "IT Support Specialist".into(),
                description: "Provide technical support and troubleshoot computer issues.".into(),
                relevance_score: 85,
                requirements: vec![
                    "Basic computer knowledge".into(),
                    "Problem-solving".into(),
                    "Customer service".into(),
                ],
                average_salary: "$40,000 - $55,000".into(),
                demand_level: DemandLevel::High,
            },
            JobRecord {
                id: "tech-2".into(),
                title: "Data Entry Clerk".into(),
                description: "Input and maintain data in computer systems.".into(),
                relevance_score: 75,
                requirements: vec![
                    "Typing skills".into(),
                    "Attention to detail".into(),
                    "Basic computer skills".into(),
                ],
                average_salary: "$30,000 - $40,000".into(),
                demand_level: DemandLevel::Medium,
            },
        ],
    }
}

pub(super) fn resources_for(category: Category) -> Vec<ResourceRecord> {
    match category {
        Category::Construction => vec![
            ResourceRecord {
                id: "osha-10".into(),
                title: "OSHA 10-Hour Construction Safety".into(),
                provider: "OSHA Training Institute".into(),
                duration: "2 days".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.osha.gov/training".into(),
                description: "Essential workplace safety training for construction workers.".into(),
            },
            ResourceRecord {
                id: "basic-carpentry".into(),
                title: "Basic Carpentry Skills".into(),
                provider: "Local Community College".into(),
                duration: "6 weeks".into(),
                resource_type: ResourceType::Course,
                url: "#".into(),
                description: "Learn fundamental carpentry techniques and tool usage.".into(),
            },
        ],
        Category::Cooking => vec![
            ResourceRecord {
                id: "servsafe".into(),
                title: "ServSafe Food Handler Certification".into(),
                provider: "National Restaurant Association".into(),
                duration: "1 day".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.servsafe.com".into(),
                description: "Food safety certification required by most employers.".into(),
            },
            ResourceRecord {
                id: "culinary-basics".into(),
                title: "Culinary Arts Fundamentals".into(),
                provider: "Local Culinary School".into(),
                duration: "8 weeks".into(),
                resource_type: ResourceType::Course,
                url: "#".into(),
                description: "Basic cooking techniques and kitchen management.".into(),
            },
        ],
        Category::Healthcare => vec![
            ResourceRecord {
                id: "cna-program".into(),
                title: "Certified Nursing Assistant Program".into(),
                provider: "American Red Cross".into(),
                duration: "4-12 weeks".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.redcross.org".into(),
                description: "Complete CNA training and certification program.".into(),
            },
            ResourceRecord {
                id: "first-aid".into(),
                title: "First Aid & CPR Certification".into(),
                provider: "American Heart Association".into(),
                duration: "1 day".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.heart.org".into(),
                description: "Essential life-saving skills for healthcare workers.".into(),
            },
        ],
        Category::Teaching => vec![
            ResourceRecord {
                id: "esl-certification".into(),
                title: "ESL Teaching Certification".into(),
                provider: "TESOL International".into(),
                duration: "120 hours".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.tesol.org".into(),
                description: "Certification to teach English as a Second Language.".into(),
            },
            ResourceRecord {
                id: "child-development".into(),
                title: "Child Development Basics".into(),
                provider: "Local Community College".into(),
                duration: "6 weeks".into(),
                resource_type: ResourceType::Course,
                url: "#".into(),
                description: "Understanding child psychology and development.".into(),
            },
        ],
        Category::Technology => vec![
            ResourceRecord {
                id: "comptia-a-plus".into(),
                title: "CompTIA A+ Certification".into(),
                provider: "CompTIA".into(),
                duration: "3-6 months".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.comptia.org".into(),
                description: "Entry-level IT certification for support specialists.".into(),
            },
            ResourceRecord {
                id: "microsoft-office".into(),
                title: "Microsoft Office Specialist".into(),
                provider: "Microsoft".into(),
                duration: "4 weeks".into(),
                resource_type: ResourceType::Certification,
                url: "https://www.microsoft.com/learning".into(),
                description: "Certification in Microsoft Office applications.".into(),
            },
        ],
    }
}

/// Generic entry-level positions returned when no category matches.
/// Ids are deliberately outside every category's job list, so resource
/// resolution over these yields nothing.
pub(super) fn fallback_jobs() -> Vec<JobRecord> {
    vec![
        JobRecord {
            id: "general-1".into(),
            title: "Customer Service Representative".into(),
            description: "Handle customer inquiries and provide support via phone, email, or chat.".into(),
            relevance_score: 70,
            requirements: vec![
                "Communication skills".into(),
                "Patience".into(),
                "Problem-solving".into(),
            ],
            average_salary: "$30,000 - $40,000".into(),
            demand_level: DemandLevel::High,
        },
        JobRecord {
            id: "general-2".into(),
            title: "Retail Associate".into(),
            description: "Assist customers, handle transactions, and maintain store appearance.".into(),
            relevance_score: 65,
            requirements: vec![
                "Customer service".into(),
                "Cash handling".into(),
                "Product knowledge".into(),
            ],
            average_salary: "$25,000 - $35,000".into(),
            demand_level: DemandLevel::High,
        },
    ]
}
