use chrono::{DateTime, TimeZone, Utc};
use std::sync::LazyLock;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};

static FALLBACK_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(build);

/// Served while the store is unreachable. Built on first use and never
/// mutated afterwards.
pub fn fallback_projects() -> &'static [Project] {
    FALLBACK_PROJECTS.as_slice()
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce solution with React, Node.js, and MongoDB"
                .to_string(),
            detailed_description: "A comprehensive e-commerce platform featuring user authentication, product catalog, shopping cart, payment integration, and admin dashboard. Built with modern web technologies and responsive design.".to_string(),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express", "Stripe"]),
            image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            github_url: "https://github.com/sakshi/ecommerce-platform".to_string(),
            live_url: Some("https://ecommerce-demo.com".to_string()),
            featured: true,
            category: ProjectCategory::Fullstack,
            created_at: day(2024, 1, 15),
        },
        Project {
            id: "2".to_string(),
            title: "Task Management App".to_string(),
            description: "A collaborative task management application with real-time updates"
                .to_string(),
            detailed_description: "A modern task management application that allows teams to collaborate effectively. Features include real-time updates, drag-and-drop functionality, deadline tracking, and team member assignments.".to_string(),
            technologies: strings(&["React", "Firebase", "Material-UI"]),
            image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            github_url: "https://github.com/sakshi/task-manager".to_string(),
            live_url: Some("https://taskmanager-demo.com".to_string()),
            featured: true,
            category: ProjectCategory::Web,
            created_at: day(2024, 2, 10),
        },
        Project {
            id: "3".to_string(),
            title: "Weather Mobile App".to_string(),
            description: "A beautiful weather app built with React Native and Kotlin".to_string(),
            detailed_description: "A cross-platform mobile weather application providing accurate weather forecasts, interactive maps, and location-based alerts. Features a clean, intuitive interface with smooth animations.".to_string(),
            technologies: strings(&["React Native", "Kotlin", "OpenWeather API"]),
            image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            github_url: "https://github.com/sakshi/weather-app".to_string(),
            live_url: None,
            featured: false,
            category: ProjectCategory::Mobile,
            created_at: day(2024, 3, 5),
        },
        Project {
            id: "4".to_string(),
            title: "API Gateway Service".to_string(),
            description: "A scalable API gateway built with Node.js and microservices architecture"
                .to_string(),
            detailed_description: "A robust API gateway service that handles authentication, rate limiting, request routing, and load balancing. Designed for high-performance microservices architecture.".to_string(),
            technologies: strings(&["Node.js", "Express", "Redis", "Docker"]),
            image: "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            github_url: "https://github.com/sakshi/api-gateway".to_string(),
            live_url: None,
            featured: false,
            category: ProjectCategory::Backend,
            created_at: day(2024, 4, 12),
        },
        Project {
            id: "5".to_string(),
            title: "Salesforce Integration Tool".to_string(),
            description: "Custom Salesforce integration for automated data synchronization"
                .to_string(),
            detailed_description: "A comprehensive Salesforce integration solution that automates data synchronization between multiple systems. Features custom workflows, real-time data validation, and error handling.".to_string(),
            technologies: strings(&["Salesforce", "Apex", "Lightning Web Components"]),
            image: "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            github_url: "https://github.com/sakshi/salesforce-integration".to_string(),
            live_url: None,
            featured: false,
            category: ProjectCategory::Fullstack,
            created_at: day(2024, 5, 20),
        },
    ]
}
