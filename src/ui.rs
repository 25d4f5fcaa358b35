// UI layer: numbered text menus over a `Console`. The flows are small and
// synchronous; the settings record is owned by the caller and passed in
// by reference.

use crate::account::{LoginForm, Role, SignUpForm};
use crate::console::{Console, ConsoleError};
use crate::settings::{AccessibilitySettings, InvalidChoice, SettingsAction, Theme};
use anyhow::Result;
use log::{debug, info};

/// Entries of the home menu, numbered 1-4 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    AccessibilitySettings,
    SignUp,
    LogIn,
    Exit,
}

impl HomeAction {
    pub const ALL: [HomeAction; 4] = [
        HomeAction::AccessibilitySettings,
        HomeAction::SignUp,
        HomeAction::LogIn,
        HomeAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HomeAction::AccessibilitySettings => "Accessibility settings",
            HomeAction::SignUp => "Sign Up",
            HomeAction::LogIn => "Log In",
            HomeAction::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for HomeAction {
    type Error = InvalidChoice;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(HomeAction::AccessibilitySettings),
            2 => Ok(HomeAction::SignUp),
            3 => Ok(HomeAction::LogIn),
            4 => Ok(HomeAction::Exit),
            other => Err(InvalidChoice(other)),
        }
    }
}

/// Ask until the answer parses as an integer. No range check is done here.
pub fn read_number(console: &mut dyn Console, prompt: &str) -> Result<i64, ConsoleError> {
    loop {
        let raw = console.ask(prompt)?;
        match raw.trim().parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => console.say("Please enter a whole number.")?,
        }
    }
}

fn print_options(console: &mut dyn Console, labels: &[&str]) -> Result<(), ConsoleError> {
    console.say("Choose an option:")?;
    for (i, label) in labels.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, label))?;
    }
    Ok(())
}

/// Show the home menu and return the raw choice.
pub fn home_menu(console: &mut dyn Console) -> Result<i64, ConsoleError> {
    console.say("Welcome to the Home Page")?;
    let labels: Vec<&str> = HomeAction::ALL.iter().map(|a| a.label()).collect();
    print_options(console, &labels)?;
    read_number(console, "Enter your choice (1-4)")
}

/// Show the accessibility menu and return the raw choice.
pub fn accessibility_menu(console: &mut dyn Console) -> Result<i64, ConsoleError> {
    console.say("Accessibility Settings Page")?;
    let labels: Vec<&str> = SettingsAction::ALL.iter().map(|a| a.label()).collect();
    print_options(console, &labels)?;
    read_number(console, "Enter your choice (1-5)")
}

pub fn show_status(
    console: &mut dyn Console,
    settings: &AccessibilitySettings,
) -> Result<(), ConsoleError> {
    console.say("Current Accessibility Settings:")?;
    for line in settings.status_lines() {
        console.say(&line)?;
    }
    Ok(())
}

fn ask_theme(console: &mut dyn Console) -> Result<Theme, ConsoleError> {
    loop {
        let raw = console.ask("Enter theme (Light/Dark)")?;
        match raw.parse::<Theme>() {
            Ok(theme) => return Ok(theme),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

fn ask_font_size(console: &mut dyn Console) -> Result<u32, ConsoleError> {
    loop {
        let n = read_number(console, "Enter font size (e.g., 10, 12, 14)")?;
        match u32::try_from(n) {
            Ok(size) if size > 0 => return Ok(size),
            _ => console.say("Invalid font size. Please enter a positive whole number.")?,
        }
    }
}

/// Apply the accessibility menu `choice` to `settings`.
///
/// Returns the action that was applied, or `None` when the choice is not
/// on the menu; in that case the record is left untouched.
pub fn update_settings(
    console: &mut dyn Console,
    settings: &mut AccessibilitySettings,
    choice: i64,
) -> Result<Option<SettingsAction>, ConsoleError> {
    let action = match SettingsAction::try_from(choice) {
        Ok(action) => action,
        Err(e) => {
            debug!("ignoring settings choice {}", e.0);
            console.say(&e.to_string())?;
            return Ok(None);
        }
    };

    match action {
        SettingsAction::ToggleScreenReader => settings.toggle_screen_reader(),
        SettingsAction::ToggleMagnifier => settings.toggle_magnifier(),
        SettingsAction::ChangeTheme => settings.theme = ask_theme(console)?,
        SettingsAction::AdjustFontSize => settings.font_size = ask_font_size(console)?,
        SettingsAction::ToggleColorInversion => settings.toggle_color_inversion(),
    }
    debug!("applied {:?}: {:?}", action, settings);
    console.say("Accessibility settings updated.")?;
    Ok(Some(action))
}

/// Collect credentials and report success. Nothing is verified.
pub fn login(console: &mut dyn Console) -> Result<LoginForm, ConsoleError> {
    console.say("Login Page")?;
    let email = console.ask("Enter your email")?;
    let password = console.ask_secret("Enter your password")?;
    console.busy("Logging in...")?;
    info!("login accepted without verification");
    console.say("Logged in successfully!")?;
    Ok(LoginForm { email, password })
}

fn ask_role(console: &mut dyn Console) -> Result<Role, ConsoleError> {
    loop {
        let raw = console.ask("Role (student/teacher/admin)")?;
        match raw.parse::<Role>() {
            Ok(role) => return Ok(role),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

/// Collect the sign-up form and run the local checks.
///
/// Every text field except the password is stored trimmed. Returns the
/// form when it passes, `None` after printing the first failing check
/// otherwise.
pub fn sign_up(console: &mut dyn Console) -> Result<Option<SignUpForm>, ConsoleError> {
    console.say("Sign Up Page")?;
    let mut form = SignUpForm {
        full_name: console.ask("Full name")?.trim().to_string(),
        email: console.ask("Email")?.trim().to_string(),
        phone: console.ask("Phone (optional)")?.trim().to_string(),
        password: console.ask_secret("Password")?,
        ..Default::default()
    };
    form.role = ask_role(console)?;
    if form.role.is_staff() {
        form.employee_id = console.ask("Employee ID")?.trim().to_string();
    } else {
        form.student_id = console.ask("Student ID")?.trim().to_string();
    }

    if let Err(e) = form.validate() {
        debug!("sign-up rejected: {}", e);
        console.say(&e.to_string())?;
        return Ok(None);
    }
    console.busy("Signing up...")?;
    info!("sign-up accepted for a {} account", form.role);
    console.say("Signup successful! You can now log in.")?;
    Ok(Some(form))
}

/// Accessibility screen: current status, menu, update, new status.
pub fn accessibility_flow(
    console: &mut dyn Console,
    settings: &mut AccessibilitySettings,
) -> Result<(), ConsoleError> {
    show_status(console, settings)?;
    let choice = accessibility_menu(console)?;
    update_settings(console, settings, choice)?;
    show_status(console, settings)
}

fn run_home(
    console: &mut dyn Console,
    settings: &mut AccessibilitySettings,
) -> Result<(), ConsoleError> {
    loop {
        let choice = home_menu(console)?;
        match HomeAction::try_from(choice) {
            Ok(HomeAction::AccessibilitySettings) => accessibility_flow(console, settings)?,
            Ok(HomeAction::SignUp) => {
                sign_up(console)?;
            }
            Ok(HomeAction::LogIn) => {
                login(console)?;
            }
            Ok(HomeAction::Exit) => return Ok(()),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

/// Main interactive loop. Runs until the operator picks "Exit" or the
/// input is closed.
pub fn main_menu(console: &mut dyn Console, settings: &mut AccessibilitySettings) -> Result<()> {
    match run_home(console, settings) {
        Ok(()) => Ok(()),
        Err(ConsoleError::Closed) => {
            debug!("input closed, leaving the main menu");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
