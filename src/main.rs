use vecmath::core::prelude::*;

fn main() -> Result<()> {
    vecmath::util::setup_log()?;

    let vec1 = Vector3::new(1, 0, 0);
    let vec2 = Vector3::new(0, 1, 0);
    let vec3 = Vector3::new(0, 0, 1);

    let vec = vec1 + vec2 + vec3;
    info!("sum of unit axes: {vec}");
    // X: 1, Y: 1, Z: 1
    println!("{vec}");
    Ok(())
}
