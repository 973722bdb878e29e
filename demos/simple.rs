use grid_search::{Algorithm, Grid};
use rand::{rngs::StdRng, SeedableRng};

// In this example a seeded 10x10 grid is peppered with walls, e.g.
// ##########
// #..#.....#
// #.S..#...#
// ...
// and searched with every algorithm. S marks the start, G the goal and * the route found.
fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut grid = Grid::new_random(10, 10, &mut rng).unwrap();
    grid.pepper_walls(&mut rng);
    grid.set_trace_visits(true);
    println!("{}", grid);

    for algorithm in Algorithm::ALL {
        let outcome = grid.search(algorithm);
        println!("{algorithm}: {} cells traversed", outcome.traversed);
        let order = outcome
            .visit_order
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("Visitation order: {order}");
        if outcome.found() {
            println!("Path of {} cells:", outcome.len());
            for y in 0..grid.height() as i32 {
                let row: String = (0..grid.width() as i32)
                    .filter_map(|x| {
                        let on_route = outcome.path.iter().any(|c| c.x() == x && c.y() == y);
                        let c = grid.display_char(x, y)?;
                        Some(if on_route && c == '.' { '*' } else { c })
                    })
                    .collect();
                println!("{row}");
            }
        } else {
            println!("Unable to find a path to the goal");
        }
        println!();
    }
}
