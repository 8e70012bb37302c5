//! Interactive knight placement
//!
//! The first cell picked places the knight, the next distinct cell becomes
//! the target and triggers a search. State lives in the session value, so
//! every session starts from a clean board.

use knightpath_core::limits::validate_cell;
use knightpath_core::{Cell, Grid, SearchEngine, SearchQuery, SearchReport};

/// What a pick did
#[derive(Debug, Clone)]
pub enum Selection {
    /// The knight now stands on this cell
    KnightPlaced(Cell),
    /// A target was picked and searched for
    Searched(SearchReport),
    /// Nothing changed
    Ignored(&'static str),
}

/// Board, knight and target for one interactive run
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    max_depth: i32,
    knight: Option<Cell>,
    target: Option<Cell>,
}

impl Session {
    pub fn new(dimension: i32, max_depth: i32) -> knightpath_core::Result<Self> {
        knightpath_core::limits::validate_max_depth(max_depth)?;
        Ok(Self {
            grid: Grid::new(dimension)?,
            max_depth,
            knight: None,
            target: None,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn knight(&self) -> Option<Cell> {
        self.knight
    }

    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// Pick a cell
    ///
    /// A target that is out of budget or unreachable is dropped again so the
    /// next pick can try another one; a found target stays until cleared.
    pub fn select(&mut self, cell: Cell) -> knightpath_core::Result<Selection> {
        validate_cell(cell, self.grid.dimension())?;

        let Some(knight) = self.knight else {
            self.knight = Some(cell);
            tracing::debug!("Knight placed on {}", cell);
            return Ok(Selection::KnightPlaced(cell));
        };

        if self.target.is_some() {
            return Ok(Selection::Ignored("a path is already shown; use 'clear' or 'reset'"));
        }
        if cell == knight {
            return Ok(Selection::Ignored("the knight already stands there"));
        }

        let query = SearchQuery::new(knight, cell)
            .on_board(self.grid.dimension())
            .with_max_depth(self.max_depth);
        let report = SearchEngine::execute(&query)?;

        if report.result.is_found() {
            self.target = Some(cell);
        }
        Ok(Selection::Searched(report))
    }

    /// Drop the target, keep the knight
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Empty the board
    pub fn reset(&mut self) {
        self.knight = None;
        self.target = None;
    }

    /// Switch to a board of another size; the board is emptied
    pub fn resize(&mut self, dimension: i32) -> knightpath_core::Result<()> {
        self.grid = Grid::new(dimension)?;
        self.reset();
        tracing::info!("Board resized to {}x{}", dimension, dimension);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightpath_core::SearchResult;

    #[test]
    fn test_first_pick_places_knight() {
        let mut session = Session::new(8, 3).unwrap();
        let selection = session.select(Cell::new(0, 0)).unwrap();
        assert!(matches!(selection, Selection::KnightPlaced(c) if c == Cell::new(0, 0)));
        assert_eq!(session.knight(), Some(Cell::new(0, 0)));
        assert_eq!(session.target(), None);
    }

    #[test]
    fn test_same_cell_is_ignored() {
        let mut session = Session::new(8, 3).unwrap();
        session.select(Cell::new(4, 4)).unwrap();
        assert!(matches!(
            session.select(Cell::new(4, 4)).unwrap(),
            Selection::Ignored(_)
        ));
        assert_eq!(session.target(), None);
    }

    #[test]
    fn test_found_target_stays_until_cleared() {
        let mut session = Session::new(8, 3).unwrap();
        session.select(Cell::new(0, 0)).unwrap();

        let Selection::Searched(report) = session.select(Cell::new(1, 2)).unwrap() else {
            panic!("expected a search");
        };
        assert!(report.result.is_found());
        assert_eq!(session.target(), Some(Cell::new(1, 2)));

        assert!(matches!(
            session.select(Cell::new(2, 1)).unwrap(),
            Selection::Ignored(_)
        ));

        session.clear_target();
        assert!(matches!(
            session.select(Cell::new(2, 1)).unwrap(),
            Selection::Searched(_)
        ));
        assert_eq!(session.knight(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_out_of_budget_target_is_dropped() {
        let mut session = Session::new(8, 3).unwrap();
        session.select(Cell::new(0, 0)).unwrap();

        let Selection::Searched(report) = session.select(Cell::new(7, 7)).unwrap() else {
            panic!("expected a search");
        };
        assert_eq!(report.result, SearchResult::ExceedsLimit { move_count: 6 });
        assert_eq!(session.target(), None);
    }

    #[test]
    fn test_off_board_pick_is_rejected() {
        let mut session = Session::new(6, 3).unwrap();
        assert!(session.select(Cell::new(6, 0)).unwrap_err().is_invalid_input());
        assert_eq!(session.knight(), None);
    }

    #[test]
    fn test_resize_empties_board() {
        let mut session = Session::new(8, 3).unwrap();
        session.select(Cell::new(7, 7)).unwrap();
        session.resize(6).unwrap();
        assert_eq!(session.grid().dimension(), 6);
        assert_eq!(session.knight(), None);
        assert!(session.resize(0).is_err());
        assert_eq!(session.grid().dimension(), 6);
    }
}
