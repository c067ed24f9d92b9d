//! Roster command-line entry point
//!
//! Thin text front end over the directory query engine and the REST store.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shared::{Employee, EmployeeId, EmployeeStatus, NewEmployee, logging};

use roster::{
    DirectoryConfig, DirectoryView, EditSession, EmployeeStore, FieldEdit, RestEmployeeStore, RosterStore,
    fetch_departments, format_start_date,
};

const COMPONENT: &str = "cli";

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Browse and edit the employee roster")]
struct Cli {
    /// Base URL of the employee store (overrides ROSTER_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds (overrides ROSTER_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List employees grouped by department
    List {
        /// Free-text search over name, department, start date, quote and status
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print the grouped view as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct departments
    Departments,

    /// Show one employee
    Show { id: String },

    /// Edit one employee and save the result
    Edit {
        id: String,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Create an employee
    Create {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        department: String,

        /// ISO-8601 date, e.g. 2023-03-03
        #[arg(long)]
        date_started: String,

        #[arg(long, default_value = "")]
        quote: String,

        #[arg(long, default_value = "active")]
        status: EmployeeStatus,

        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Delete an employee
    Delete { id: String },
}

#[derive(Args, Debug)]
struct EditFields {
    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    date_started: Option<String>,

    #[arg(long)]
    department: Option<String>,

    #[arg(long)]
    quote: Option<String>,

    #[arg(long)]
    status: Option<EmployeeStatus>,

    #[arg(long)]
    avatar_url: Option<String>,
}

impl EditFields {
    fn into_edits(self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if let Some(value) = self.first_name {
            edits.push(FieldEdit::FirstName(value));
        }
        if let Some(value) = self.last_name {
            edits.push(FieldEdit::LastName(value));
        }
        if let Some(value) = self.date_started {
            edits.push(FieldEdit::DateStarted(value));
        }
        if let Some(value) = self.department {
            edits.push(FieldEdit::Department(value));
        }
        if let Some(value) = self.quote {
            edits.push(FieldEdit::Quote(value));
        }
        if let Some(value) = self.status {
            edits.push(FieldEdit::Status(value));
        }
        if let Some(value) = self.avatar_url {
            edits.push(FieldEdit::AvatarUrl(value));
        }
        edits
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DirectoryConfig::from_env().context("could not load configuration")?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(millis) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(millis));
    }
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(COMPONENT, &format!("roster client for {}", config.base_url));

    let store = Arc::new(RestEmployeeStore::new(&config)?);

    if let Err(e) = run(cli.command, store).await {
        logging::log_error(COMPONENT, "roster command", &e);
        return Err(e);
    }

    Ok(())
}

async fn run(command: Command, store: Arc<RestEmployeeStore>) -> Result<()> {
    match command {
        Command::List { search, json } => {
            let roster = RosterStore::new(store);
            roster.load().await.context("Error fetching employees")?;
            let view = roster.search(&search).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }

        Command::Departments => {
            for department in fetch_departments(store.as_ref()).await? {
                println!("{department}");
            }
        }

        Command::Show { id } => {
            let employee = store
                .get_employee(&EmployeeId::new(id))
                .await
                .context("Error fetching employee data")?;
            print_employee(&employee);
        }

        Command::Edit { id, fields } => {
            let mut session = EditSession::open(store, &EmployeeId::new(id))
                .await
                .context("Error fetching employee data")?;

            for edit in fields.into_edits() {
                session.set(edit)?;
            }

            let updated = session.save().await.context("Error updating employee details")?;
            logging::log_success(COMPONENT, "Employee updated");
            print_employee(&updated);
        }

        Command::Create {
            first_name,
            last_name,
            department,
            date_started,
            quote,
            status,
            avatar_url,
        } => {
            let mut new = NewEmployee::new(first_name, last_name, department, date_started)?
                .with_quote(quote)
                .with_status(status);
            if let Some(url) = avatar_url {
                new = new.with_avatar_url(url);
            }

            let created = store.create_employee(&new).await.context("Error creating employee")?;
            print_employee(&created);
        }

        Command::Delete { id } => {
            let id = EmployeeId::new(id);
            store.delete_employee(&id).await.context("Error deleting employee")?;
            println!("Deleted employee {id}");
        }
    }

    Ok(())
}

fn print_view(view: &DirectoryView) {
    if view.is_empty() {
        println!("No employees match {:?}", view.query);
        return;
    }

    for section in &view.sections {
        println!("{}", section.department);
        for row in &section.rows {
            let id = row.id.as_ref().map(ToString::to_string).unwrap_or_default();
            println!(
                "  {:>4}  {:<28} {:<16} {:<9} {}",
                id,
                row.full_name,
                row.start_date,
                row.status,
                row.quote.replace('\n', " / ")
            );
        }
        println!();
    }
}

fn print_employee(employee: &Employee) {
    let id = employee.id.as_ref().map(ToString::to_string).unwrap_or_default();
    println!("Id:          {id}");
    println!("Name:        {}", employee.full_name());
    println!("Department:  {}", employee.department);
    println!(
        "Start date:  {}",
        format_start_date(&employee.date_started).unwrap_or_else(|| employee.date_started.clone())
    );
    println!("Status:      {}", employee.effective_status());
    println!("Avatar:      {}", employee.effective_avatar_url());
    println!("Quote:");
    for line in employee.quote.lines() {
        println!("  {line}");
    }
}
