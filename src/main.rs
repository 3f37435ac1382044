// treetrace: step-by-step terminal visualizer for binary tree inorder traversal

mod engine;
mod parser;
mod playback;
mod tree;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use engine::Method;
use tree::Tree;
use ui::App;

const DEFAULT_INPUT: &str = "[1,null,2,3]";

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [TREE] [METHOD]", program_name);
    eprintln!();
    eprintln!("  TREE    level-order array literal, default {}", DEFAULT_INPUT);
    eprintln!("          'null' marks an absent node; descendants of an absent");
    eprintln!("          node are not listed");
    eprintln!("  METHOD  'recursive' or 'iterative', default iterative");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"[4,2,6,1,3,5,7]\"            # balanced tree", program_name);
    eprintln!("  {} \"[1,2,null,3]\" recursive     # left-skewed chain", program_name);
    eprintln!();
    eprintln!("Inside the TUI: ←/→ step, space auto-play, m switch method,");
    eprintln!("r random tree, e cycle examples, q quit.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("treetrace");

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(program_name);
        return Ok(());
    }

    if args.len() > 3 {
        eprintln!("Error: too many arguments");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let input = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_INPUT);

    let method = match args.get(2) {
        Some(raw) => match raw.parse::<Method>() {
            Ok(method) => method,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        },
        None => Method::Iterative,
    };

    // Parse the input literal
    eprintln!("Parsing {}...", input);
    let entries = match parser::parse_level_order(input) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Input error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Build the tree and record the trace
    let tree = Tree::from_level_order(&entries);
    eprintln!(
        "Built tree with {} node(s), height {}.",
        tree.len(),
        tree.height()
    );

    let expected = match method {
        Method::Recursive => engine::traverse_recursive(&tree),
        Method::Iterative => engine::traverse_iterative(&tree),
    };
    eprintln!("Inorder result: {:?}", expected);

    let steps = engine::traverse_with_steps(&tree, method);
    eprintln!("Recorded {} step(s) ({} traversal).", steps.len(), method);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(tree, input.to_string(), method);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
