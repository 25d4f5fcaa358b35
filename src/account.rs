// Account forms: the data collected by the login and sign-up screens.
// Credentials are never checked against anything; sign-up only runs the
// local form checks before reporting success.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Login form payload.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid role. Please enter 'student', 'teacher' or 'admin'.")]
pub struct UnknownRole(pub String);

impl Role {
    /// Staff accounts are identified by an employee ID instead of a student ID.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        })
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Sign-up form payload. `student_id` is only meaningful for students and
/// `employee_id` only for staff.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
    pub student_id: String,
    pub employee_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Full name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Phone must be 11 digits")]
    InvalidPhone,
    #[error("Student ID is required")]
    MissingStudentId,
    #[error("Employee ID is required")]
    MissingEmployeeId,
}

impl SignUpForm {
    /// Run the form checks in order and report the first failure.
    pub fn validate(&self) -> Result<(), SignUpError> {
        if self.full_name.trim().is_empty() {
            return Err(SignUpError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(SignUpError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(SignUpError::MissingPassword);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(SignUpError::InvalidEmail);
        }
        if !self.phone.is_empty()
            && !(self.phone.len() == 11 && self.phone.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(SignUpError::InvalidPhone);
        }
        if self.role.is_staff() {
            if self.employee_id.is_empty() {
                return Err(SignUpError::MissingEmployeeId);
            }
        } else if self.student_id.is_empty() {
            return Err(SignUpError::MissingStudentId);
        }
        Ok(())
    }
}
