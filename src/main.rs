#![warn(rust_2018_idioms)]

use rand::prelude::*;

use mahjong_table::model::*;
use mahjong_table::util::{misc::*, sample};
use mahjong_table::{error, info};

// 局面を表示する確認用ツール
// 引数なしでランダムな局面を生成, -f でJSONファイルから読み込み
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut seed = 0u64;
    let mut perspective = Seat::East;
    let mut file_path = "".to_string();
    let mut json = false;

    let mut it = args[1..].iter();
    while let Some(s) = it.next() {
        match s.as_str() {
            "-s" => seed = next_value(&mut it, s),
            "-p" => perspective = next_value(&mut it, s),
            "-f" => file_path = next_value(&mut it, s),
            "-j" => json = true,
            opt => {
                error!("unknown option: {}", opt);
                return;
            }
        }
    }

    if !file_path.is_empty() {
        if let Err(e) = show_file(&file_path, perspective) {
            error!("{}", e);
        }
        return;
    }

    if seed == 0 {
        seed = unixtime_now() as u64;
        info!(
            "Random seed is not specified. Unix timestamp '{}' is used as seed.",
            seed
        );
    }

    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let mut stage = sample::random_stage(&mut rng);
    stage.player_mut(perspective).is_shown = true;

    if json {
        match serde_json::to_string_pretty(&stage) {
            Ok(s) => println!("{}", s),
            Err(e) => error!("{}", e),
        }
        return;
    }

    show_stage(&stage, perspective);
}

fn show_file(path: &str, perspective: Seat) -> Res {
    let text = std::fs::read_to_string(path)?;
    let stage: Stage = serde_json::from_str(&text)?;
    stage.validate()?;
    show_stage(&stage, perspective);
    Ok(())
}

fn show_stage(stage: &Stage, perspective: Seat) {
    println!("{}", stage);
    println!();

    let layout = stage.layout(perspective);
    println!(
        "round wind: {}, perspective: {} (seat wind: {})",
        stage.prevalent_wind(),
        layout.perspective,
        stage.seat_wind(layout.perspective).tile(),
    );
    println!(
        "left: {}, opposite: {}, right: {}",
        layout.left, layout.opposite, layout.right,
    );
}
