use cube_state::{CubeError, CubeState, Face, Grid};
use log::info;

fn sexy_move(cube: &mut CubeState) {
    cube.rotate_right_clockwise(0).unwrap();
    cube.rotate_up_clockwise(0).unwrap();
    cube.rotate_right_counterclockwise(0).unwrap();
    cube.rotate_up_counterclockwise(0).unwrap();
}

#[test_log::test]
fn test_sexy_move_has_order_six() {
    for size in [3, 4] {
        let solved = CubeState::new(size).unwrap();
        let mut cube = solved.clone();

        for i in 1..=6 {
            sexy_move(&mut cube);

            if i < 6 {
                assert_ne!(cube, solved, "size {size} solved after {i} repetitions");
            }
        }

        info!("Cube of size {size} after six repetitions:\n{cube}");
        assert_eq!(cube, solved);
    }
}

#[test_log::test]
fn test_turning_every_layer_rotates_the_whole_cube() {
    let mut cube = CubeState::new(4).unwrap();

    for depth in 0..4 {
        cube.rotate_front_clockwise(depth).unwrap();
    }

    assert!(cube.is_solved());
    assert_eq!(cube[Face::Front], Grid::filled(4, 4, Face::Front));
    assert_eq!(cube[Face::Back], Grid::filled(4, 4, Face::Back));
    assert_eq!(cube[Face::Right], Grid::filled(4, 4, Face::Up));
    assert_eq!(cube[Face::Down], Grid::filled(4, 4, Face::Right));
    assert_eq!(cube[Face::Left], Grid::filled(4, 4, Face::Down));
    assert_eq!(cube[Face::Up], Grid::filled(4, 4, Face::Left));
}

#[test_log::test]
fn test_single_sticker_cube_every_face() {
    for face in Face::ALL {
        let mut cube = CubeState::new(1).unwrap();
        cube.rotate_clockwise(face, 0).unwrap();

        assert_eq!(cube.sticker_counts(), [1; 6]);
        assert_eq!(*cube.face_values(face).get(0, 0).unwrap(), face);
        assert_eq!(*cube.face_values(face.opposite()).get(0, 0).unwrap(), face.opposite());

        for _ in 0..3 {
            cube.rotate_clockwise(face, 0).unwrap();
        }
        assert_eq!(cube, CubeState::new(1).unwrap());
    }
}

#[test_log::test]
fn test_queries_match_generic_accessor() {
    let mut cube = CubeState::new(3).unwrap();
    cube.rotate_back_clockwise(1).unwrap();
    cube.rotate_left_counterclockwise(0).unwrap();

    assert_eq!(cube.front_values(), cube.face_values(Face::Front));
    assert_eq!(cube.right_values(), cube.face_values(Face::Right));
    assert_eq!(cube.back_values(), cube.face_values(Face::Back));
    assert_eq!(cube.left_values(), cube.face_values(Face::Left));
    assert_eq!(cube.up_values(), cube.face_values(Face::Up));
    assert_eq!(cube.down_values(), cube.face_values(Face::Down));
}

#[test_log::test]
fn test_named_turns_match_generic_turns() {
    type Turn = fn(&mut CubeState, usize) -> Result<(), CubeError>;

    let named: [(Face, Turn, Turn); 6] = [
        (
            Face::Front,
            CubeState::rotate_front_clockwise,
            CubeState::rotate_front_counterclockwise,
        ),
        (
            Face::Right,
            CubeState::rotate_right_clockwise,
            CubeState::rotate_right_counterclockwise,
        ),
        (
            Face::Back,
            CubeState::rotate_back_clockwise,
            CubeState::rotate_back_counterclockwise,
        ),
        (
            Face::Left,
            CubeState::rotate_left_clockwise,
            CubeState::rotate_left_counterclockwise,
        ),
        (
            Face::Up,
            CubeState::rotate_up_clockwise,
            CubeState::rotate_up_counterclockwise,
        ),
        (
            Face::Down,
            CubeState::rotate_down_clockwise,
            CubeState::rotate_down_counterclockwise,
        ),
    ];

    for (face, clockwise, counterclockwise) in named {
        for depth in 0..3 {
            let mut a = CubeState::new(3).unwrap();
            let mut b = a.clone();
            sexy_move(&mut a);
            sexy_move(&mut b);

            clockwise(&mut a, depth).unwrap();
            b.rotate_clockwise(face, depth).unwrap();
            assert_eq!(a, b);

            counterclockwise(&mut a, depth).unwrap();
            b.rotate_counterclockwise(face, depth).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test_log::test]
fn test_out_of_range_depth() {
    let mut cube = CubeState::new(3).unwrap();

    let err = cube.rotate_front_clockwise(3).unwrap_err();
    assert_eq!(err, CubeError::InvalidDepth { depth: 3, size: 3 });
    assert_eq!(
        err.to_string(),
        "Rotation depth is out of bounds, expected a value below 3 but got 3"
    );
    assert!(cube.is_solved());
    assert_eq!(cube, CubeState::new(3).unwrap());
}
