// src/seed/data.rs

use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::modules::skill::application::domain::entities::{SkillCategory, SkillLevel};

pub struct SeedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub category: ProjectCategory,
    pub featured: bool,
}

pub struct SeedSkill {
    pub category: SkillCategory,
    pub name: &'static str,
    pub level: SkillLevel,
}

pub struct SeedEducation {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub grade: &'static str,
    pub description: &'static str,
    pub order: i32,
}

pub struct SeedExperience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub kind: ExperienceType,
}

pub const PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Skin Sage App",
        description: "AI-powered skin health diagnosis application with machine learning integration",
        detailed_description: "A comprehensive skin health application that uses machine learning to analyze skin conditions and provide personalized recommendations. Built with React for frontend, Node.js for backend, and MongoDB for data storage.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Machine Learning", "TensorFlow"],
        image: "https://images.pexels.com/photos/3762879/pexels-photo-3762879.jpeg",
        github_url: "https://github.com/sakshi/skin-sage",
        live_url: None,
        category: ProjectCategory::Fullstack,
        featured: true,
    },
    SeedProject {
        title: "Recipe Sharing Platform",
        description: "Full-stack recipe sharing platform with image upload and user authentication",
        detailed_description: "A social platform for food enthusiasts to share and discover recipes. Features include user authentication, image uploads, recipe categorization, and social interactions.",
        technologies: &["React", "Node.js", "Express", "MongoDB", "Cloudinary", "JWT"],
        image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
        github_url: "https://github.com/sakshi/recipe-platform",
        live_url: Some("https://recipe-platform-demo.netlify.app"),
        category: ProjectCategory::Fullstack,
        featured: true,
    },
    SeedProject {
        title: "Weather App",
        description: "Android weather application with MVVM architecture and real-time data",
        detailed_description: "Modern Android weather app built with Kotlin using MVVM architecture. Features real-time weather data, location-based forecasts, and clean material design interface.",
        technologies: &["Kotlin", "MVVM", "Retrofit", "Room Database", "Material Design"],
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg",
        github_url: "https://github.com/sakshi/weather-app",
        live_url: None,
        category: ProjectCategory::Mobile,
        featured: false,
    },
    SeedProject {
        title: "College Automation System",
        description: "Salesforce-based college management system with custom workflows",
        detailed_description: "Comprehensive college management system built on Salesforce platform with custom objects, workflows, and automation for student and faculty management.",
        technologies: &["Salesforce", "Apex", "Visualforce", "Lightning Components", "SOQL"],
        image: "https://images.pexels.com/photos/159844/cellular-education-classroom-159844.jpeg",
        github_url: "https://github.com/sakshi/college-automation",
        live_url: None,
        category: ProjectCategory::Backend,
        featured: false,
    },
];

const fn skill(category: SkillCategory, name: &'static str, level: SkillLevel) -> SeedSkill {
    SeedSkill {
        category,
        name,
        level,
    }
}

use SkillCategory::{Cloud, Crm, Database, Languages, Tools, Web};
use SkillLevel::{Advanced, Beginner, Expert, Intermediate};

pub const SKILLS: &[SeedSkill] = &[
    skill(Languages, "Java", Advanced),
    skill(Languages, "C++", Intermediate),
    skill(Languages, "Kotlin", Intermediate),
    skill(Languages, "JavaScript", Advanced),
    skill(Languages, "TypeScript", Intermediate),
    skill(Web, "React.js", Advanced),
    skill(Web, "Node.js", Advanced),
    skill(Web, "Express.js", Advanced),
    skill(Web, "HTML5", Expert),
    skill(Web, "CSS3", Advanced),
    skill(Web, "Tailwind CSS", Advanced),
    skill(Database, "MongoDB", Advanced),
    skill(Database, "MySQL", Intermediate),
    skill(Database, "Firebase", Intermediate),
    skill(Tools, "Git & GitHub", Advanced),
    skill(Tools, "Android Studio", Advanced),
    skill(Tools, "Postman", Intermediate),
    skill(Tools, "VS Code", Expert),
    skill(Cloud, "AWS EC2", Intermediate),
    skill(Cloud, "AWS S3", Intermediate),
    skill(Cloud, "AWS IAM", Beginner),
    skill(Crm, "Salesforce", Intermediate),
    skill(Crm, "Apex", Intermediate),
    skill(Crm, "Visualforce", Beginner),
    skill(Crm, "Lightning", Beginner),
];

pub const EDUCATION: &[SeedEducation] = &[
    SeedEducation {
        degree: "Bachelor of Engineering - Computer Engineering",
        institution: "Trinity College of Engineering and Research",
        year: "2025",
        grade: "8.5 GPA",
        description: "Final year student specializing in software development and computer systems",
        order: 1,
    },
    SeedEducation {
        degree: "Diploma in Computer Engineering",
        institution: "JSPM Polytechnic",
        year: "2023",
        grade: "84.17%",
        description: "Comprehensive foundation in computer science and programming",
        order: 2,
    },
    SeedEducation {
        degree: "Secondary School Certificate (SSC)",
        institution: "CBT Sadhana Vidyalaya",
        year: "2020",
        grade: "82.40%",
        description: "Strong academic foundation with focus on mathematics and sciences",
        order: 3,
    },
];

pub const EXPERIENCES: &[SeedExperience] = &[
    SeedExperience {
        company: "EY GDS AICTE",
        position: "Web Development Intern",
        duration: "December 2024 - April 2025",
        description: "Working on Django-based web applications with focus on backend API development. Contributing to a note-sharing application with user authentication and file management features.",
        technologies: &["Django", "Python", "REST APIs", "PostgreSQL", "Git"],
        kind: ExperienceType::Internship,
    },
    SeedExperience {
        company: "Pro Azure",
        position: "Android Development Intern",
        duration: "June 2022 - August 2022",
        description: "Developed mobile applications using modern Android development practices. Implemented MVVM architecture, Room database integration, and Firebase backend services.",
        technologies: &["Kotlin", "MVVM", "Room", "Firebase", "XML", "RecyclerView"],
        kind: ExperienceType::Internship,
    },
];
