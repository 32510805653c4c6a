// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
    _    _            ____        _
   / \  | | __ _  ___/ ___|  ___ | |_   _____ _ __
  / _ \ | |/ _` |/ _ \___ \ / _ \| \ \ / / _ \ '__|
 / ___ \| | (_| | (_) |__) | (_) | |\ V /  __/ |
/_/   \_\_|\__, |\___/____/ \___/|_| \_/ \___|_|
           |___/

    Coding Problem Solution Client
"#;
    println!("{}", banner);
}
