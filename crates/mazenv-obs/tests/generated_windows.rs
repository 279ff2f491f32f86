//! Windows over generated mazes in several ranks.

use mazenv_gen::{MazeGenerator, PrimGenerator};
use mazenv_maze::CellKind;
use mazenv_obs::{WindowPlan, WindowSpec, NUM_CELL_FIELDS};
use mazenv_space::{Move, Shape};
use mazenv_test_utils::{fixtures, GENERATION_SHAPES};

#[test]
fn window_at_start_is_centred_on_start() {
    let mut generator = PrimGenerator::from_seed(8);
    for dims in GENERATION_SHAPES {
        let shape = Shape::new(dims).unwrap();
        let maze = generator.generate(&shape).unwrap();
        let plan = WindowSpec { horizon: 2 }.compile(shape.ndim()).unwrap();
        let start = maze.start().unwrap();
        let window = plan.extract(&maze, start).unwrap();
        assert_eq!(window.cells().len(), 5usize.pow(shape.ndim() as u32));
        assert_eq!(window.cells()[window.center_index()], CellKind::Start);
    }
}

#[test]
fn moving_along_the_solution_keeps_agent_on_open_cells() {
    let maze = fixtures::corridor_maze();
    let path = maze.solve().unwrap().unwrap();
    let plan = WindowPlan::new(2, 1).unwrap();
    for step in path.windows(2) {
        let index = (1..Move::action_count(2))
            .find(|&i| Move::from_index(2, i).map(|m| m.apply(&step[0])) == Some(step[1].clone()))
            .expect("consecutive path cells are one move apart");
        let window = plan.extract(&maze, &step[0]).unwrap();
        let target = Move::from_index(2, index).unwrap().apply(&[0, 0]);
        assert!(!window.get(&target).unwrap().is_wall());
    }
}

#[test]
fn encoded_window_has_fixed_length() {
    let maze = fixtures::open_grid(&[3, 3, 3]);
    let plan = WindowPlan::new(3, 1).unwrap();
    for pos in maze.positions() {
        let bytes = plan.extract(&maze, &pos).unwrap().encode_one_hot();
        assert_eq!(bytes.len(), 27 * NUM_CELL_FIELDS);
    }
}
