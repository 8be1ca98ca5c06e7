//! Line-oriented interactive session: build a grid, place obstacles, then
//! search routes between endpoints until the user stops.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::render::render_map;
use crate::search::Algorithm;
use crate::{Coordinate, Grid, PathfindingService, MAX_GRID_SIDE, MIN_GRID_SIDE};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /**
     * Asks until the answer is an integer in `min..=max`.
     */
    pub fn ask_int(&mut self, message: &str, min: i32, max: i32) -> io::Result<i32> {
        loop {
            let answer = self.read_answer(&format!("{} ({} - {}): ", message, min, max))?;
            match answer.parse::<i32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => self.say(&format!("Invalid value, must be between {} and {}", min, max))?,
                Err(_) => self.say("Please enter a valid number")?,
            }
        }
    }

    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let answer = self.read_answer(&format!("{} (y/n): ", message))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" | "s" | "si" | "sí" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y/n")?,
            }
        }
    }

    /**
     * Asks for a strategy name; an empty answer picks the default.
     */
    pub fn ask_algorithm(&mut self) -> io::Result<Algorithm> {
        loop {
            let answer =
                self.read_answer("Search algorithm [dijkstra/bfs/astar] (Enter for dijkstra): ")?;
            if answer.is_empty() {
                return Ok(Algorithm::default());
            }
            match answer.parse::<Algorithm>() {
                Ok(algorithm) => return Ok(algorithm),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn ask_coordinate(&mut self, label: &str, grid: &Grid) -> io::Result<Coordinate> {
        self.say(&format!("\n{}:", label))?;
        let x = self.ask_int(" X coordinate", 0, grid.width() - 1)?;
        let y = self.ask_int(" Y coordinate", 0, grid.height() - 1)?;
        Ok(Coordinate::new(x, y))
    }
}

/**
 * Runs the whole interactive session. Returns when the user declines another
 * search, or with an error if input ends early.
 */
pub fn run_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    let banner = "=".repeat(60);
    prompter.say(&banner)?;
    prompter.say("Route finder")?;
    prompter.say(&banner)?;

    let width = prompter.ask_int("Map width", MIN_GRID_SIDE, MAX_GRID_SIDE)?;
    let height = prompter.ask_int("Map height", MIN_GRID_SIDE, MAX_GRID_SIDE)?;
    let grid = Grid::new(width, height)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut service = PathfindingService::with_dijkstra(grid);
    prompter.say(&format!("Map created ({} x {})", width, height))?;

    let algorithm = prompter.ask_algorithm()?;
    if algorithm != Algorithm::default() {
        service.set_strategy(algorithm.strategy());
    }

    let count = prompter.ask_int("How many obstacles?", 0, width * height - 2)?;
    for i in 0..count {
        let coord = prompter.ask_coordinate(&format!("Obstacle {}", i + 1), service.grid())?;
        if !service.grid_mut().add_obstacle(coord) {
            prompter.say("Invalid coordinate, obstacle not added")?;
        }
    }

    loop {
        prompter.say(&format!("\n{}", "-".repeat(60)))?;
        prompter.say("Route search")?;
        let start = prompter.ask_coordinate("Start point", service.grid())?;
        let goal = prompter.ask_coordinate("Destination", service.grid())?;

        match service.grid_mut().set_endpoints(start, goal) {
            Ok(()) => report_search(prompter, &mut service)?,
            Err(e) => prompter.say(&e.to_string())?,
        }

        if !prompter.confirm("\nSearch another route?")? {
            debug!("session finished");
            return Ok(());
        }
    }
}

fn report_search<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    service: &mut PathfindingService,
) -> io::Result<()> {
    prompter.say("Searching for the best route...")?;
    match service.compute_shortest_path() {
        Ok(Some(path)) => {
            prompter.say(&path.describe())?;
            prompter.say(&render_map(service.grid(), Some(&path)))
        }
        Ok(None) => {
            prompter.say("No route could be found")?;
            prompter.say(&render_map(service.grid(), None))
        }
        Err(e) => prompter.say(&e.to_string()),
    }
}
