use proxy_tts::{constants::PROXY_LIST, probe::Prober, proxy::ProxyConfig};
use std::time::Instant;

fn main() {
    let prober = Prober::default();

    println!("probe one by one...");
    for raw in PROXY_LIST {
        let proxy = ProxyConfig::try_from(raw).unwrap();
        let start = Instant::now();
        println!("{:?} in {:?}", prober.probe(&proxy), Instant::now() - start);
    }

    println!("diagnose...");
    for report in prober.diagnose(&PROXY_LIST) {
        println!("{}", report);
    }
}
