//! Interactive category and ingredient menus.
//!
//! Navigation is a flat loop over [`MenuState`]; returning to the category
//! menu never nests a call, so a session can run indefinitely.

mod console;

use rusqlite::Connection;
use std::io::{BufRead, Write};

use crate::calc::{describe_purchase, plural_name, PurchaseRequest, YieldModel, MAX_QUANTITY};
use crate::db::{get_category_by_id, list_categories, CatalogTable};
use crate::domain::{Category, Ingredient};
use crate::error::Result;

use console::Console;

const QUIT_HINT: &str = "\nEnter 'q' to quit.";
const ACTION_PROMPT: &str = "\nAction:  ";
const FAREWELL: &str = "Peace!";
const INVALID_NUMBER: &str = "Enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    CategoryMenu,
    ItemMenu(Category),
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    /// Clear the terminal after each result
    pub clear_screen: bool,
    pub yield_model: YieldModel,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            yield_model: YieldModel::Legacy,
        }
    }
}

pub struct Navigator<'a, R, W> {
    conn: &'a Connection,
    console: Console<R, W>,
    options: MenuOptions,
}

impl<'a, R: BufRead, W: Write> Navigator<'a, R, W> {
    pub fn new(conn: &'a Connection, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            conn,
            console: Console::new(input, output),
            options,
        }
    }

    /// Run menus until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::CategoryMenu;
        loop {
            tracing::trace!("Menu state: {:?}", state);
            state = match state {
                MenuState::CategoryMenu => self.category_menu()?,
                MenuState::ItemMenu(category) => self.item_menu(category)?,
                MenuState::Exit => {
                    self.console.say(FAREWELL)?;
                    return Ok(());
                }
            };
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn category_menu(&mut self) -> Result<MenuState> {
        let categories = list_categories(self.conn)?;
        loop {
            self.console.say(QUIT_HINT)?;
            for (id, category) in &categories {
                self.console.say(&format!("{}) {}", id, category))?;
            }

            let Some(choice) = self.console.ask(ACTION_PROMPT)? else {
                return Ok(MenuState::Exit);
            };
            if is_quit(&choice) {
                return Ok(MenuState::Exit);
            }

            let Ok(id) = choice.parse::<i64>() else {
                self.console.say("Please enter a valid response.")?;
                continue;
            };
            // Unknown numbers just show the menu again
            if let Some(category) = get_category_by_id(self.conn, id)? {
                return Ok(MenuState::ItemMenu(category));
            }
        }
    }

    fn item_menu(&mut self, category: Category) -> Result<MenuState> {
        let table = CatalogTable::new(self.conn, category);
        loop {
            self.console.say(QUIT_HINT)?;
            for ingredient in table.list_all()? {
                self.console.say(&format!("{}) {}", ingredient.id, ingredient.name))?;
            }

            let Some(choice) = self.console.ask(ACTION_PROMPT)? else {
                return Ok(MenuState::Exit);
            };
            if is_quit(&choice) {
                return Ok(MenuState::Exit);
            }

            let Ok(id) = choice.parse::<i64>() else {
                self.console.say("Please enter a valid integer.")?;
                continue;
            };
            let Some(ingredient) = table.get_by_id(id)? else {
                continue;
            };

            let Some(request) = self.ask_request(&ingredient)? else {
                return Ok(MenuState::Exit);
            };
            match describe_purchase(&ingredient, request, self.options.yield_model) {
                Ok(text) => self.console.say(&text)?,
                Err(e) => {
                    tracing::warn!("Could not calculate purchase for {}: {}", ingredient.name, e);
                    self.console.say(&e.to_string())?;
                }
            }

            let Some(next) =
                self.console.ask("[R] returns to main menu, [C] Continue to check quantities.  ")?
            else {
                return Ok(MenuState::Exit);
            };
            if self.options.clear_screen {
                self.console.clear()?;
            }
            if !next.eq_ignore_ascii_case("c") {
                return Ok(MenuState::CategoryMenu);
            }
        }
    }

    /// Ask for servings (and ounces for weighed items). `None` means input ended.
    fn ask_request(&mut self, ingredient: &Ingredient) -> Result<Option<PurchaseRequest>> {
        let servings_prompt = format!(
            "How many servings or individual {} called for?   ",
            plural_name(&ingredient.name).to_lowercase()
        );

        if !ingredient.by_weight {
            let count = self
                .console
                .ask_number::<u64>(&servings_prompt, INVALID_NUMBER, |count| *count <= MAX_QUANTITY)?;
            return Ok(count.map(|count| PurchaseRequest::ByCount { count }));
        }

        let Some(servings) =
            self.console.ask_number::<f64>(&servings_prompt, INVALID_NUMBER, is_quantity)?
        else {
            return Ok(None);
        };
        let Some(ounces_per_serving) = self.console.ask_number::<f64>(
            "How many ounces per serving?   ",
            INVALID_NUMBER,
            is_quantity,
        )?
        else {
            return Ok(None);
        };

        Ok(Some(PurchaseRequest::ByWeight {
            servings,
            ounces_per_serving,
        }))
    }
}

fn is_quit(choice: &str) -> bool {
    choice.eq_ignore_ascii_case("q")
}

fn is_quantity(value: &f64) -> bool {
    value.is_finite() && *value >= 0.0 && *value <= MAX_QUANTITY as f64
}
