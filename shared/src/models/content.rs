//! Static company content
//!
//! Marketing copy served read-only by the server: service offerings,
//! leadership profiles and company milestones.

use serde::{Deserialize, Serialize};

/// Service offering card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon identifier for the frontend
    pub icon: String,
}

/// Leadership profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Executive {
    pub name: String,
    pub role: String,
    pub experience: String,
    pub bio: String,
    pub image_url: String,
}

/// Company milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub year: String,
    pub title: String,
    pub description: String,
}

fn service(id: &str, title: &str, description: &str, icon: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

/// The fixed service offerings list
pub fn seed_services() -> Vec<Service> {
    vec![
        service(
            "s1",
            "Computer Maintenance",
            "Comprehensive yearly maintenance (AMC) to ensure longevity and optimal performance of your IT assets.",
            "fa-screwdriver-wrench",
        ),
        service(
            "s2",
            "Laptops & Desktops",
            "High-performance computing solutions tailored for both personal and enterprise business demands.",
            "fa-laptop",
        ),
        service(
            "s3",
            "Data Recovery",
            "Advanced data retrieval services for failed hard drives and storage systems with a high success rate.",
            "fa-database",
        ),
        service(
            "s4",
            "Networking & Security",
            "Robust infrastructure setups and fortified security measures to protect your digital perimeter.",
            "fa-shield-halved",
        ),
        service(
            "s5",
            "Software Installation",
            "End-to-end installation and configuration of OS, productivity suites, and specialized industry software.",
            "fa-code",
        ),
        service(
            "s6",
            "PC Tune-ups",
            "Optimization services to remove bottlenecks, viruses, and bloatware from your existing systems.",
            "fa-bolt",
        ),
    ]
}

/// The fixed leadership profiles
pub fn seed_executives() -> Vec<Executive> {
    vec![
        Executive {
            name: "Mr. Sadeek Jauffer".to_string(),
            role: "CEO".to_string(),
            experience: "20+ Years".to_string(),
            bio: "A visionary leader who has steered the course of Smart Solutions Lanka with strategic acumen and unwavering commitment.".to_string(),
            image_url: "https://picsum.photos/seed/ceo/400/400".to_string(),
        },
        Executive {
            name: "Mr. K.P. Sampath Perera".to_string(),
            role: "Financial Analyst".to_string(),
            experience: "5 Years".to_string(),
            bio: "Driving force in enhancing financial performance through astute insights and strategic optimization.".to_string(),
            image_url: "https://picsum.photos/seed/finance/400/400".to_string(),
        },
    ]
}

/// The fixed company milestones
pub fn seed_history() -> Vec<Achievement> {
    vec![
        Achievement {
            year: "2019".to_string(),
            title: "Foundation".to_string(),
            description: "Established with a visionary mission to provide high-quality IT solutions in Sri Lanka.".to_string(),
        },
        Achievement {
            year: "2025".to_string(),
            title: "Present Day".to_string(),
            description: "Operating as a prominent player in the IT sector with over 25 highly skilled professionals.".to_string(),
        },
    ]
}
