use rand::SeedableRng;
use rand::rngs::StdRng;

/// Answer a single argv-delivered plugin request on stdout.
///
/// Always succeeds from the process point of view; problems are reported
/// inside the emitted document.
pub fn run(request: Option<&str>) -> Result<(), String> {
    let mut rng = StdRng::from_os_rng();
    println!("{}", super::respond(request, &mut rng));
    Ok(())
}
