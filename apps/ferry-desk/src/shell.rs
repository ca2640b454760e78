//! # Desk Shell
//!
//! Line-oriented front end over the desk commands. Each input line is parsed
//! with clap as a subcommand; multi-field input (the registration form and
//! the admin password) is read with prompts.
//!
//! ## Session Example
//! ```text
//! ferry> register
//! Name: Juan Cruz
//! Status (Infant/Child/Student/Regular/Senior): Student
//! Local (Yes/No): No
//! Destination (Tingloy/Mabini): Tingloy
//! PWD (Yes/No) [No]:
//! QR Code Generated!
//! Traveler ID: 101
//! ...
//! ferry> login
//! Password: ********
//! ferry> pay 101
//! Traveler 101 marked as paid!
//! ```
//!
//! The shell is generic over its reader and writer so tests can drive it
//! with scripted input.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};

use ferry_core::validation::RegistrationForm;
use ferry_core::PassengerStatus;

use crate::commands::{self, TicketView, TravelerRow};
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Line Grammar
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "ferry", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Register a traveler and issue a QR ticket
    Register,
    /// Log in as admin
    Login,
    /// End the admin session
    Logout,
    /// Show all travelers (admin)
    #[command(alias = "list")]
    Dashboard,
    /// Mark a traveler as paid (admin)
    Pay { id: String },
    /// Set the departure time, HH:MM 24-hour (admin)
    Time { time: String },
    /// Find a traveler by id (admin)
    Search { id: String },
    /// Check a traveler's ticket image
    View { id: String },
    /// Switch summer pricing for new registrations (admin)
    Season {
        #[arg(value_enum)]
        mode: SeasonMode,
    },
    /// Print all travelers as JSON (admin)
    Export,
    /// Show the running configuration
    Config,
    /// Leave the desk
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeasonMode {
    On,
    Off,
}

enum Flow {
    Continue,
    Quit,
}

// =============================================================================
// Shell
// =============================================================================

pub struct Shell<R, W> {
    input: R,
    output: W,
    state: AppState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, state: AppState) -> Self {
        Shell {
            input,
            output,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reads and executes lines until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{} Desk. Type 'help' for commands.",
            self.state.config().ticket_title
        )?;

        loop {
            let Some(line) = self.prompt("ferry> ")? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match ShellLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => {
                    if let Flow::Quit = self.dispatch(parsed.command)? {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e.to_string().trim_end())?,
            }
        }

        self.output.flush()
    }

    fn dispatch(&mut self, command: ShellCommand) -> io::Result<Flow> {
        match command {
            ShellCommand::Register => return self.register(),
            ShellCommand::Login => return self.login(),
            ShellCommand::Logout => {
                commands::admin_logout(&mut self.state);
                writeln!(self.output, "Logged out.")?;
            }
            ShellCommand::Dashboard => self.dashboard()?,
            ShellCommand::Pay { id } => match commands::mark_paid(&mut self.state, &id) {
                Ok(row) => writeln!(self.output, "Traveler {} marked as paid!", row.id)?,
                Err(e) => self.error(&e)?,
            },
            ShellCommand::Time { time } => {
                match commands::set_departure_time(&mut self.state, &time) {
                    Ok(message) => writeln!(self.output, "{message}")?,
                    Err(e) => self.error(&e)?,
                }
            }
            ShellCommand::Search { id } => match commands::search_traveler(&self.state, &id) {
                Ok(row) => self.table(std::slice::from_ref(&row))?,
                Err(e) => self.error(&e)?,
            },
            ShellCommand::View { id } => match commands::view_ticket(&self.state, &id) {
                Ok(response) => match response.view {
                    TicketView::Image { width, height } => writeln!(
                        self.output,
                        "Ticket {}: {} ({}x{})",
                        response.traveler_id,
                        response.path.display(),
                        width,
                        height
                    )?,
                    TicketView::Placeholder { message } => writeln!(self.output, "{message}")?,
                },
                Err(e) => self.error(&e)?,
            },
            ShellCommand::Season { mode } => {
                match commands::set_summer_season(&mut self.state, mode == SeasonMode::On) {
                    Ok(true) => writeln!(
                        self.output,
                        "Summer season: ON (10% off base fares for new registrations)"
                    )?,
                    Ok(false) => writeln!(self.output, "Summer season: OFF")?,
                    Err(e) => self.error(&e)?,
                }
            }
            ShellCommand::Export => match commands::export_travelers(&self.state) {
                Ok(json) => writeln!(self.output, "{json}")?,
                Err(e) => self.error(&e)?,
            },
            ShellCommand::Config => {
                let config = commands::get_config(&self.state);
                match serde_json::to_string_pretty(&config) {
                    Ok(json) => writeln!(self.output, "{json}")?,
                    Err(e) => self.error(&ApiError::internal(e.to_string()))?,
                }
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn register(&mut self) -> io::Result<Flow> {
        if let Some(banner) = commands::departure_banner(&self.state) {
            writeln!(self.output, "{banner}")?;
        }

        let statuses: Vec<&str> = PassengerStatus::ALL.iter().map(|s| s.label()).collect();
        let status_prompt = format!("Status ({}): ", statuses.join("/"));
        let destination_prompt =
            format!("Destination ({}): ", self.state.config().destinations.join("/"));

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(status) = self.prompt(&status_prompt)? else {
            return Ok(Flow::Quit);
        };
        let Some(local) = self.prompt("Local (Yes/No): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(destination) = self.prompt(&destination_prompt)? else {
            return Ok(Flow::Quit);
        };
        let Some(pwd) = self.prompt("PWD (Yes/No) [No]: ")? else {
            return Ok(Flow::Quit);
        };

        let form = RegistrationForm {
            name,
            status,
            local,
            destination,
            pwd,
        };

        match commands::submit_registration(&mut self.state, &form) {
            Ok(response) => {
                writeln!(self.output, "QR Code Generated!")?;
                writeln!(self.output, "Traveler ID: {}", response.traveler_id)?;
                writeln!(self.output, "Fare: {}", response.fare)?;
                writeln!(self.output, "Departure: {}", response.departure)?;
                writeln!(self.output, "Ticket saved to: {}", response.ticket_path)?;
                if let Some(error) = response.ticket_error {
                    writeln!(self.output, "Warning: ticket image not saved: {error}")?;
                }
            }
            Err(e) => self.error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn login(&mut self) -> io::Result<Flow> {
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(Flow::Quit);
        };

        match commands::admin_login(&mut self.state, &password) {
            Ok(()) => {
                writeln!(self.output, "Admin login successful.")?;
                self.dashboard()?;
            }
            Err(e) => self.error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn dashboard(&mut self) -> io::Result<()> {
        let dashboard = match commands::get_dashboard(&self.state) {
            Ok(dashboard) => dashboard,
            Err(e) => return self.error(&e),
        };

        writeln!(
            self.output,
            "Total Passengers: {} | Paid: {} | Fares: {} | Departure: {} | Season: {}",
            dashboard.total_passengers,
            dashboard.paid_count,
            dashboard.total_fares,
            dashboard.departure,
            if dashboard.summer_season { "Summer" } else { "Regular" }
        )?;
        self.table(&dashboard.rows)
    }

    // =========================================================================
    // Output Helpers
    // =========================================================================

    fn table(&mut self, rows: &[TravelerRow]) -> io::Result<()> {
        writeln!(
            self.output,
            "{:<6} {:<20} {:<8} {:<5} {:<4} {:<12} {:>10}  {}",
            "ID", "Name", "Status", "Local", "PWD", "Destination", "Fare", "Paid"
        )?;
        for row in rows {
            writeln!(
                self.output,
                "{:<6} {:<20} {:<8} {:<5} {:<4} {:<12} {:>10}  {}",
                row.id, row.name, row.status, row.local, row.pwd, row.destination, row.fare, row.paid
            )?;
        }
        Ok(())
    }

    fn error(&mut self, error: &ApiError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error.message)
    }

    /// Prints `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state_in;
    use std::io::Cursor;
    use std::path::Path;

    fn run_script(dir: &Path, script: &str) -> (String, AppState) {
        let mut shell = Shell::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            state_in(dir),
        );
        shell.run().unwrap();
        let Shell { output, state, .. } = shell;
        (String::from_utf8(output).unwrap(), state)
    }

    #[test]
    fn test_register_flow() {
        let dir = tempfile::tempdir().unwrap();
        let (output, state) =
            run_script(dir.path(), "register\nJuan Cruz\nStudent\nNo\nTingloy\n\nquit\n");

        assert!(!output.contains("Departure Time:"));
        assert!(output.contains("QR Code Generated!"));
        assert!(output.contains("Traveler ID: 101"));
        assert!(output.contains("Fare: ₱166.00"));
        assert_eq!(state.registry().len(), 1);
    }

    #[test]
    fn test_register_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let (output, state) = run_script(dir.path(), "register\n\nStudent\nNo\nTingloy\n\n");

        assert!(output.contains("Error: Please fill in all fields!"));
        assert!(state.registry().is_empty());
    }

    #[test]
    fn test_admin_session_flow() {
        let dir = tempfile::tempdir().unwrap();
        let script = "\
login
admin1234
time 14:30
register
Ana Reyes
senior
yes
mabini
yes
pay 101
list
";
        let (output, state) = run_script(dir.path(), script);

        assert!(output.contains("Admin login successful."));
        assert!(output.contains("Departure: 2:30 PM"));
        assert!(output.contains("Departure Time: 2:30 PM"));
        assert!(output.contains("Traveler 101 marked as paid!"));
        assert!(output.contains("Total Passengers: 1"));
        assert!(output.contains("✓ Paid"));
        assert!(output.contains("₱83.20"));
        assert!(state.registry().find(101).unwrap().is_paid);
    }

    #[test]
    fn test_admin_commands_need_login() {
        let dir = tempfile::tempdir().unwrap();
        let (output, state) = run_script(dir.path(), "login\nwrong\nlist\ntime 08:00\n");

        assert!(output.contains("Error: ❌ Incorrect password!"));
        assert!(output.contains("Error: Admin login required"));
        assert!(state.departure().is_none());
    }

    #[test]
    fn test_logout_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let (output, state) = run_script(dir.path(), "login\nadmin1234\nlogout\nexport\n");

        assert!(output.contains("Logged out."));
        assert!(output.contains("Error: Admin login required"));
        assert!(!state.is_admin());
    }

    #[test]
    fn test_season_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let script = "login\nadmin1234\nseason on\nregister\nBen\nRegular\nYes\nTingloy\nNo\n";
        let (output, _) = run_script(dir.path(), script);

        assert!(output.contains("Summer season: ON"));
        assert!(output.contains("Fare: ₱144.00"));
    }

    #[test]
    fn test_search_and_view() {
        let dir = tempfile::tempdir().unwrap();
        let script = "\
register
Ana
Child
Yes
Tingloy

login
admin1234
search 101
search 999
view 101
";
        let (output, _) = run_script(dir.path(), script);

        assert!(output.contains("Traveler ID 999 not found"));
        assert!(output.contains("(1080x1920)"));
        let search_row = output
            .lines()
            .find(|l| l.starts_with("101 ") && l.contains("Child"));
        assert!(search_row.is_some());
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let (output, _) = run_script(dir.path(), "fly\nquit\n");
        assert!(output.contains("error:"));
    }

    #[test]
    fn test_bad_departure_time() {
        let dir = tempfile::tempdir().unwrap();
        let (output, _) = run_script(dir.path(), "login\nadmin1234\ntime 25:00\ntime noon\n");

        assert!(output.contains("Invalid time! Use HH:MM format (00-23:00-59)"));
        assert!(output.contains("Invalid format! Use HH:MM (24-hour format)"));
    }

    #[test]
    fn test_end_of_input_mid_form() {
        let dir = tempfile::tempdir().unwrap();
        let (_, state) = run_script(dir.path(), "register\nAna\n");
        assert!(state.registry().is_empty());
    }
}
