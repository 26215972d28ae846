/// Ply limit for a remaining time budget in seconds. Lower bounds are inclusive.
pub fn depth_for_time(remaining: f64) -> u32 {
    if remaining >= 150.0 { 6 }
    else if remaining >= 100.0 { 5 }
    else if remaining >= 50.0 { 4 }
    else if remaining >= 30.0 { 3 }
    else if remaining >= 5.0 { 2 }
    else { 1 }
}
