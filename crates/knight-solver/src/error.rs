// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use knight_ls::config::ConfigError;
use knight_model::error::BoardError;
use knight_search::report::InputError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("no strategies configured")]
    NoStrategies,
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid annealing configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("strategy '{0}' panicked")]
    StrategyPanicked(String),
}

impl From<BoardError> for SolverError {
    fn from(err: BoardError) -> Self {
        SolverError::Input(InputError::Board(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_model::position::Position;

    #[test]
    fn test_board_errors_become_input_errors() {
        let err = SolverError::from(BoardError::InvalidSize(0));
        assert!(matches!(err, SolverError::Input(InputError::Board(_))));

        let err = SolverError::from(BoardError::StartOutOfBounds {
            position: Position::new(5, 1),
            size: 5,
        });
        assert_eq!(err.to_string(), "start position (5,1) is outside the 5x5 board");
    }

    #[test]
    fn test_messages() {
        assert_eq!(SolverError::NoStrategies.to_string(), "no strategies configured");
        assert_eq!(
            SolverError::from(ConfigError::ZeroIterations).to_string(),
            "invalid annealing configuration: iterations per temperature must be at least 1"
        );
    }
}
