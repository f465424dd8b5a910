//! Initial data loaded into a fresh backend.

use chrono::NaiveDate;

use eduspot_auth::{Account, Role};
use eduspot_core::{AccountId, DepartmentId, StudentId, TeacherId};
use eduspot_directory::{Department, Student, Teacher};

const DEPARTMENTS: [(&str, &str, &str, &str); 3] = [
    (
        "dept-1",
        "Information Technology",
        "IT",
        "Networking, databases and modern computing",
    ),
    (
        "dept-2",
        "Business Administration",
        "BBA",
        "Management, marketing, and organizational studies",
    ),
    (
        "dept-3",
        "Biotechnology",
        "BIO",
        "Study of living systems and biological sciences",
    ),
];

// id, first, last, email, department, (year, month, day)
type StudentRow = (&'static str, &'static str, &'static str, &'static str, &'static str, (i32, u32, u32));

const STUDENTS: [StudentRow; 4] = [
    ("student-IT-001", "Ayaan", "Rahman", "ayaan@school.edu", "dept-1", (2024, 6, 10)),
    ("student-BBA-001", "Meera", "Nair", "meera@school.edu", "dept-2", (2024, 6, 15)),
    ("student-IT-002", "Rohan", "Menon", "rohan@school.edu", "dept-1", (2024, 7, 1)),
    ("student-BIO-001", "Sara", "Thomas", "sara@school.edu", "dept-3", (2025, 1, 5)),
];

const TEACHERS: [(&str, &str, &str, &str, &str, &str); 3] = [
    ("teacher-IT-001", "Dr. Neha", "Sharma", "neha@school.edu", "dept-1", "Cloud Computing"),
    ("teacher-BBA-001", "Prof. Vikram", "Singh", "vikram@school.edu", "dept-2", "Finance"),
    ("teacher-BIO-001", "Dr. Aisha", "Khan", "aisha@school.edu", "dept-3", "Genetics"),
];

/// Seed accounts with their clear-text secrets.
const ACCOUNTS: [(&str, &str, &str, &str, Role); 2] = [
    ("u1", "System Admin", "admin@eduspot.edu", "password", Role::Admin),
    ("u2", "Faculty Login", "teacher@eduspot.edu", "password", Role::Teacher),
];

pub fn departments() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .map(|&(id, name, code, description)| Department::new(id, name, code, description))
        .collect()
}

pub fn students() -> Vec<Student> {
    STUDENTS
        .iter()
        .filter_map(|&(id, first, last, email, dept, (y, m, d))| {
            Some(Student {
                id: StudentId::new(id),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                department_id: DepartmentId::new(dept),
                enrollment_date: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
}

pub fn teachers() -> Vec<Teacher> {
    TEACHERS
        .iter()
        .map(|&(id, first, last, email, dept, specialization)| Teacher {
            id: TeacherId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department_id: DepartmentId::new(dept),
            specialization: specialization.to_string(),
        })
        .collect()
}

/// Accounts paired with the secret they log in with.
pub fn accounts() -> Vec<(Account, &'static str)> {
    ACCOUNTS
        .iter()
        .map(|&(id, name, email, secret, role)| {
            (Account::new(AccountId::new(id), name, email, role), secret)
        })
        .collect()
}
