pub static PROXY_LIST: [&str; 10] = [
    "38.154.227.167:5868:fheilixw:affxwfk8a0j1",
    "198.23.239.134:6540:fheilixw:affxwfk8a0j1",
    "207.244.217.165:6712:fheilixw:affxwfk8a0j1",
    "107.172.163.27:6543:fheilixw:affxwfk8a0j1",
    "216.10.27.159:6837:fheilixw:affxwfk8a0j1",
    "136.0.207.84:6661:fheilixw:affxwfk8a0j1",
    "64.64.118.149:6732:fheilixw:affxwfk8a0j1",
    "142.147.128.93:6593:fheilixw:affxwfk8a0j1",
    "104.239.105.125:6655:fheilixw:affxwfk8a0j1",
    "206.41.172.74:6634:fheilixw:affxwfk8a0j1",
];

pub static IP_ECHO_URL: &str = "https://api.ipify.org?format=json";
pub static API_BASE_URL: &str = "https://api.elevenlabs.io";
pub static API_KEY_HEADER: &str = "xi-api-key";
pub static REQUEST_TIMEOUT_SECS: u64 = 10;
pub static OUTPUT_PATH: &str = "output.mp3";

pub static DEFAULT_VOICE_ID: &str = "JBFqnCBsd6RMkjVDRZzb";
pub static DEFAULT_MODEL_ID: &str = "eleven_flash_v2_5";
pub static DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

pub static API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub static PROXY_LIST_ENV: &str = "PROXY_LIST";
pub static IP_ECHO_URL_ENV: &str = "IP_ECHO_URL";
pub static API_BASE_URL_ENV: &str = "ELEVENLABS_API_BASE";
pub static REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";
pub static OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";
