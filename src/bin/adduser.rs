use std::io::{self, Write};

use dotenvy::dotenv;
use regex::Regex;

/// Interactive helper that appends a `username:password` line to the login
/// details file. The username charset is restricted so it can never smuggle
/// a `:` separator or a path component into the per-user log path.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💬 chatfront - Add User");
    println!("=======================");

    dotenv().ok();

    let path = std::env::var("LOGIN_DETAILS_PATH").unwrap_or_else(|_| "login_details.txt".to_string());

    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim().to_string();

    let valid_username = Regex::new(r"^[A-Za-z0-9_.-]+$")?;
    if !valid_username.is_match(&username) {
        eprintln!("❌ Username must be non-empty and contain only letters, digits, '_', '.' or '-'");
        return Ok(());
    }

    let existing = chatfront::credentials::load(path.as_ref())?;
    if existing.contains_key(&username) {
        eprintln!("❌ User '{username}' already exists in {path}");
        return Ok(());
    }

    print!("Password: ");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;

    if password.is_empty() {
        eprintln!("❌ Password cannot be empty");
        return Ok(());
    }

    print!("Password (again): ");
    io::stdout().flush()?;
    let password_confirm = rpassword::read_password()?;

    if password != password_confirm {
        eprintln!("❌ Passwords don't match");
        return Ok(());
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    writeln!(file, "{username}:{password}")?;

    println!();
    println!("✅ User added to {path}");
    println!("   Username: {username}");
    println!("🌐 They can now sign in at /login");

    Ok(())
}
