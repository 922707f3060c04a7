//! Default data set applied to a never-written store.

use chrono::NaiveDate;
use keyhour_core::roles::Role;

use crate::models::{Project, ProjectStatus, User};
use crate::store::Collections;

/// The default users and projects: two students, one manager, one
/// admin, three projects (two active, one finished). Applications,
/// hours, and notifications start empty.
pub fn default_collections() -> Collections {
    Collections {
        users: vec![
            User {
                id: 1,
                email: "alumno1@key.edu.sv".into(),
                password: "1234".into(),
                role: Role::Student,
                scholarship_percent: 40,
                name: "Juan Pérez".into(),
            },
            User {
                id: 2,
                email: "alumno2@key.edu.sv".into(),
                password: "abcd".into(),
                role: Role::Student,
                scholarship_percent: 80,
                name: "María González".into(),
            },
            User {
                id: 3,
                email: "encargado1@key.edu.sv".into(),
                password: "admin123".into(),
                role: Role::Manager,
                scholarship_percent: 0,
                name: "Carlos Rodríguez".into(),
            },
            User {
                id: 4,
                email: "admin@key.edu.sv".into(),
                password: "root2025".into(),
                role: Role::Admin,
                scholarship_percent: 0,
                name: "Administrador".into(),
            },
        ],
        projects: vec![
            Project {
                id: 1,
                name: "Desarrollo App Móvil".into(),
                description: "Desarrollo de aplicación móvil para gestión de biblioteca".into(),
                total_hours: 120,
                total_seats: 5,
                manager_email: "encargado1@key.edu.sv".into(),
                status: ProjectStatus::Active,
                created_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
                location: "Laboratorio 3".into(),
                requirements: "React Native, JavaScript".into(),
            },
            Project {
                id: 2,
                name: "Investigación en IA".into(),
                description: "Investigación sobre aplicaciones de IA en educación".into(),
                total_hours: 80,
                total_seats: 3,
                manager_email: "encargado1@key.edu.sv".into(),
                status: ProjectStatus::Active,
                created_date: NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date"),
                location: "Centro de Investigación".into(),
                requirements: "Python básico".into(),
            },
            Project {
                id: 3,
                name: "Sistema Web Escolar".into(),
                description: "Desarrollo de sistema web para gestión académica".into(),
                total_hours: 150,
                total_seats: 6,
                manager_email: "encargado1@key.edu.sv".into(),
                status: ProjectStatus::Finished,
                created_date: NaiveDate::from_ymd_opt(2023, 11, 5).expect("valid date"),
                location: "Virtual".into(),
                requirements: "HTML, CSS, JavaScript".into(),
            },
        ],
        applications: Vec::new(),
        hours: Vec::new(),
        notifications: Vec::new(),
    }
}
