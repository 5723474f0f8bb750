//! The interactive menu loop.

use crate::cli::commands;
use crate::cli::menu::{InvalidOption, MenuOption};
use crate::cli::style::Color;
use crate::cli::terminal::Terminal;
use crate::core::Catalog;
use crate::errors::{Error, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Owns the catalog for the lifetime of the session and drives it from the terminal.
pub struct Shell<R, W> {
    catalog: Catalog,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    #[must_use]
    pub const fn new(catalog: Catalog, terminal: Terminal<R, W>) -> Self {
        Self { catalog, terminal }
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// Returns the final catalog together with the terminal.
    ///
    /// # Errors
    /// Returns an error if reading from or writing to the terminal fails.
    pub fn run(mut self) -> Result<(Catalog, Terminal<R, W>)> {
        info!(products = self.catalog.len(), "Shell started");
        loop {
            self.terminal.clear_screen()?;
            self.draw_menu()?;

            let Some(line) = self.terminal.read_line()? else {
                info!("Input closed, leaving the menu");
                break;
            };

            self.terminal.clear_screen()?;
            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(InvalidOption(raw)) => {
                    debug!(input = %raw, "Invalid menu option");
                    self.terminal.say_colored("Invalid option!", Color::Red)?;
                    self.terminal.pause()?;
                    continue;
                }
            };

            if option == MenuOption::Exit {
                self.exit()?;
                break;
            }

            match self.dispatch(option) {
                Ok(()) => self.terminal.pause()?,
                Err(Error::InputClosed) => {
                    info!("Input closed during {:?}, leaving the menu", option);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok((self.catalog, self.terminal))
    }

    fn draw_menu(&mut self) -> Result<()> {
        let header = format!("===== MENU - {} =====", self.terminal.config().store_name);
        self.terminal.say_colored(&header, Color::Purple)?;
        for option in MenuOption::ALL {
            let entry = format!("{} - {}", option.number(), option.label());
            self.terminal.say_colored(&entry, Color::Blue)?;
        }
        self.terminal.print_prompt("Choose an option: ")
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        debug!(?option, "Dispatching menu option");
        match option {
            MenuOption::AddProduct => commands::add_product(&mut self.catalog, &mut self.terminal),
            MenuOption::ListProducts => commands::list_products(&self.catalog, &mut self.terminal),
            MenuOption::SellProduct => {
                commands::sell_product(&mut self.catalog, &mut self.terminal).map(|_| ())
            }
            MenuOption::ShowTotalValue => {
                commands::show_total_value(&self.catalog, &mut self.terminal)
            }
            MenuOption::Exit => Ok(()),
        }
    }

    fn exit(&mut self) -> Result<()> {
        self.terminal.say_colored("Shutting down...", Color::Green)?;
        let delay = self.terminal.config().exit_delay_ms;
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
        self.terminal.clear_screen()?;
        info!(products = self.catalog.len(), "Shell stopped");
        Ok(())
    }
}
