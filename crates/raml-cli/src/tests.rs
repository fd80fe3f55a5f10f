use crate::*;
use raml_codec::TieBreak;
use tempfile::TempDir;

const SCENE: &str = "JOE: coffee. SUE: tea. JOE: coffee? SUE: tea. JOE: fine.\n";

// ========== Delimiter parsing ==========

#[test]
fn test_delim_ascii() {
    assert_eq!(parse_delimiter(",").unwrap(), b',');
    assert_eq!(parse_delimiter(" ").unwrap(), b' ');
}

#[test]
fn test_delim_escapes() {
    assert_eq!(parse_delimiter("\\n").unwrap(), b'\n');
    assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
    assert_eq!(parse_delimiter("\\s").unwrap(), b' ');
    assert_eq!(parse_delimiter("\\0").unwrap(), 0);
}

#[test]
fn test_delim_hex() {
    assert_eq!(parse_delimiter("0x2c").unwrap(), b',');
    assert_eq!(parse_delimiter("0XFF").unwrap(), 0xFF);
    assert!(parse_delimiter("0xZZ").is_err());
}

#[test]
fn test_delim_rejects() {
    assert!(parse_delimiter("").is_err());
    assert!(parse_delimiter("ab").is_err());
    assert!(parse_delimiter("\u{e9}").is_err());
}

// ========== Config ==========

#[test]
fn test_config_default() {
    assert_eq!(load_config(None, None).unwrap(), CodecConfig::default());
}

#[test]
fn test_config_file_and_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raml.json");
    fs::write(&path, r#"{"delimiter": 10, "tie_break": "lexical"}"#).unwrap();

    let config = load_config(Some(&path), None).unwrap();
    assert_eq!(config, CodecConfig::new(b'\n', TieBreak::Lexical));

    let config = load_config(Some(&path), Some(b',')).unwrap();
    assert_eq!(config.delimiter, b',');
    assert_eq!(config.tie_break, TieBreak::Lexical);
}

#[test]
fn test_config_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "not json").unwrap();
    assert!(load_config(Some(&path), None).is_err());
    assert!(load_config(Some(&dir.path().join("missing.json")), None).is_err());
}

// ========== Commands ==========

#[test]
fn test_default_output_path() {
    assert_eq!(default_output(Path::new("movie/in.txt")), PathBuf::from("movie/in.txt.raml"));
}

#[test]
fn test_encode_decode_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let encoded = dir.path().join("in.txt.raml");
    let decoded = dir.path().join("out.txt");
    fs::write(&input, SCENE).unwrap();

    let summary = encode_file(&input, &encoded, &CodecConfig::default()).unwrap();
    assert_eq!(summary.original_len, SCENE.len());
    assert_eq!(fs::metadata(&encoded).unwrap().len() as usize, summary.encoded_len);

    let text = decode_file(&encoded, Some(&decoded)).unwrap();
    assert_eq!(text, SCENE.as_bytes());
    assert_eq!(fs::read(&decoded).unwrap(), SCENE.as_bytes());
}

#[test]
fn test_decode_to_memory_only() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let encoded = dir.path().join("in.raml");
    fs::write(&input, SCENE).unwrap();
    encode_file(&input, &encoded, &CodecConfig::default()).unwrap();

    assert_eq!(decode_file(&encoded, None).unwrap(), SCENE.as_bytes());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_decode_corrupt_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.raml");
    let out = dir.path().join("out.txt");
    fs::write(&bad, b"NOPE and more bytes than a header").unwrap();

    let err = decode_file(&bad, Some(&out)).unwrap_err();
    assert!(format!("{err:#}").contains("magic"));
    assert!(!out.exists());
}

#[test]
fn test_encode_missing_input() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("x.raml");
    assert!(encode_file(&dir.path().join("nope.txt"), &out, &CodecConfig::default()).is_err());
    assert!(!out.exists());
}

#[test]
fn test_inspect_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let encoded = dir.path().join("in.raml");
    fs::write(&input, SCENE).unwrap();
    encode_file(&input, &encoded, &CodecConfig::default()).unwrap();

    let info = inspect_file(&encoded).unwrap();
    assert_eq!(info.words[0], b"JOE: ");
    let text = format_info(&info, 2);
    assert!(text.contains("wml: 0"));
    assert!(text.contains("\"JOE: \""));
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn test_format_summary() {
    let summary = raml_codec::encode_to(b"a a a", &CodecConfig::default(), &mut Vec::new()).unwrap();
    let line = format_summary(&summary);
    assert!(line.starts_with("5 -> "));
    assert!(line.contains("3 tokens, 2 unique"));
}

#[test]
fn test_write_atomic_replaces() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("f.raml");
    write_atomic(&path, b"one").unwrap();
    write_atomic(&path, b"two").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"two");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_encode_tmp_input_survives() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("script.tmp");
    let encoded = dir.path().join("script.raml");
    fs::write(&input, SCENE).unwrap();

    encode_file(&input, &encoded, &CodecConfig::default()).unwrap();
    assert_eq!(fs::read(&input).unwrap(), SCENE.as_bytes());

    let decoded = dir.path().join("script.txt");
    let neighbour = dir.path().join("script.tmp");
    decode_file(&encoded, Some(&decoded)).unwrap();
    assert_eq!(fs::read(&neighbour).unwrap(), SCENE.as_bytes());
    assert_eq!(fs::read(&decoded).unwrap(), SCENE.as_bytes());
}

#[test]
fn test_write_atomic_missing_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested.raml");
    write_atomic(&path, b"data").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"data");
    assert!(write_atomic(&dir.path().join("missing/x.raml"), b"data").is_err());
}

#[test]
fn test_info_json_respects_word_limit() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let encoded = dir.path().join("in.raml");
    fs::write(&input, SCENE).unwrap();
    encode_file(&input, &encoded, &CodecConfig::default()).unwrap();

    let info = inspect_file(&encoded).unwrap();
    let json: serde_json::Value = serde_json::from_str(&format_info_json(&info, 1).unwrap()).unwrap();
    assert_eq!(json["words"], serde_json::json!(["JOE: "]));
    assert_eq!(json["unique_count"], info.unique_count);
}
