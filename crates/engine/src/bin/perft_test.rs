use engine::perft::{perft_detailed, perft_divide, START_POSITION_COUNTS};
use engine::{Board, PieceColor};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let max_depth: u32 = match std::env::args().nth(1).map(|arg| arg.parse()) {
        None => 3,
        Some(Ok(depth)) => depth,
        Some(Err(e)) => {
            eprintln!("usage: perft_test [depth]  ({})", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Perft from the start position, up to depth {}", max_depth);
    let mut board = Board::new();
    let mut all_passed = true;

    for &(depth, expected) in START_POSITION_COUNTS {
        if depth > max_depth {
            break;
        }

        let result = match perft_detailed(&mut board, PieceColor::White, depth) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("perft failed at depth {}: {}", depth, e);
                return ExitCode::FAILURE;
            }
        };

        let passed = result.nodes == expected;
        all_passed &= passed;
        println!(
            "{} depth {}: {} nodes (expected {}) in {}ms, {} nodes/s",
            if passed { "PASS" } else { "FAIL" },
            depth,
            result.nodes,
            expected,
            result.time_ms,
            result.nodes_per_second()
        );
        println!(
            "  captures {}, promotions {}, checks {}, checkmates {}",
            result.captures, result.promotions, result.checks, result.checkmates
        );

        if !passed {
            if let Ok(divide) = perft_divide(&mut board, PieceColor::White, depth) {
                for ((from, to), nodes) in divide {
                    println!("  {}{}: {}", from, to, nodes);
                }
            }
            break;
        }
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
