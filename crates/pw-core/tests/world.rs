use pw_core::{
    Fleet, GameState, Order, OrderError, Owner, Planet, PlanetId, Point, WorldMut, WorldView,
};

fn planet(id: u32, x: f64, y: f64, owner: Owner, ships: u32, growth: u32) -> Planet {
    Planet::new(PlanetId(id), Point::new(x, y), owner, ships, growth)
}

fn sample() -> GameState {
    GameState::new(
        vec![
            planet(0, 0.0, 0.0, Owner::Me, 20, 1),
            planet(1, 3.0, 4.0, Owner::Neutral, 5, 2),
            planet(2, 10.0, 0.0, Owner::Enemy(2), 8, 3),
            planet(3, 0.0, 1.0, Owner::Me, 1, 1),
        ],
        vec![Fleet {
            owner: Owner::Enemy(2),
            num_ships: 4,
            source: PlanetId(2),
            destination: PlanetId(3),
            total_trip_length: 10,
            turns_remaining: 2,
        }],
    )
}

#[test]
fn ownership_filters() {
    let state = sample();

    let mine: Vec<_> = state.my_planets().map(|p| p.id.0).collect();
    let others: Vec<_> = state.not_my_planets().map(|p| p.id.0).collect();
    let neutral: Vec<_> = state.neutral_planets().map(|p| p.id.0).collect();
    let enemy: Vec<_> = state.enemy_planets().map(|p| p.id.0).collect();

    assert_eq!(mine, vec![0, 3]);
    assert_eq!(others, vec![1, 2]);
    assert_eq!(neutral, vec![1]);
    assert_eq!(enemy, vec![2]);
    assert_eq!(state.enemy_fleets().count(), 1);
    assert_eq!(state.my_fleets().count(), 0);
}

#[test]
fn distance_is_symmetric_and_rounded_up() {
    let state = sample();
    let a = state.planet(PlanetId(0)).unwrap();
    let b = state.planet(PlanetId(1)).unwrap();
    let c = state.planet(PlanetId(3)).unwrap();

    assert_eq!(state.distance(a, b), 5);
    assert_eq!(state.distance(b, a), 5);
    // sqrt(3^2 + 3^2) = 4.24..
    assert_eq!(state.distance(b, c), 5);
    assert_eq!(state.distance(a, a), 0);
}

#[test]
fn orders_accumulate_per_source() {
    let mut state = sample();

    state.issue_order(PlanetId(0), PlanetId(1), 6).unwrap();
    state.issue_order(PlanetId(0), PlanetId(2), 10).unwrap();
    assert_eq!(state.uncommitted_ships(PlanetId(0)), Some(4));

    let err = state.issue_order(PlanetId(0), PlanetId(2), 5).unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientShips {
            planet: PlanetId(0),
            requested: 5,
            available: 4
        }
    );

    assert_eq!(state.ships_ordered(), 16);
    assert_eq!(
        state.orders()[0],
        Order {
            source: PlanetId(0),
            destination: PlanetId(1),
            num_ships: 6
        }
    );
    assert_eq!(state.orders()[1].to_string(), "0 2 10");
}

#[test]
fn invalid_orders_are_rejected() {
    let mut state = sample();

    assert_eq!(
        state.issue_order(PlanetId(2), PlanetId(0), 1),
        Err(OrderError::NotOwned(PlanetId(2)))
    );
    assert_eq!(
        state.issue_order(PlanetId(0), PlanetId(0), 1),
        Err(OrderError::SelfTarget(PlanetId(0)))
    );
    assert_eq!(
        state.issue_order(PlanetId(0), PlanetId(1), 0),
        Err(OrderError::NoShips(PlanetId(0)))
    );
    assert_eq!(
        state.issue_order(PlanetId(0), PlanetId(42), 1),
        Err(OrderError::UnknownPlanet(PlanetId(42)))
    );
    assert!(state.orders().is_empty());
}

#[test]
fn take_orders_resets_commitments() {
    let mut state = sample();
    state.issue_order(PlanetId(0), PlanetId(1), 20).unwrap();

    let orders = state.take_orders();
    assert_eq!(orders.len(), 1);
    assert!(state.orders().is_empty());
    assert_eq!(state.uncommitted_ships(PlanetId(0)), Some(20));
}

#[test]
fn centroid_of_nothing_is_none() {
    assert_eq!(Point::centroid(Vec::new()), None);
    assert_eq!(
        Point::centroid(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]),
        Some(Point::new(2.0, 1.0))
    );
}
