use gba_strings::rom::{export, strings::STRING_COUNT};
use gba_strings::{Language, Result, RomError, RomReader};
use std::env;
use std::fs;

fn usage(program: &str) {
    eprintln!("Usage: {} <path-to-rom.gba> [COMMAND]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  fetch <LANG> <ID>   Decode one string. LANG is 0-5, ID is 0-3461");
    eprintln!("                      (decimal or 0x-prefixed hex).");
    eprintln!("  export [FILE]       Decode everything into an indented JSON file");
    eprintln!("                      (default: StringFetcher.json).");
    eprintln!();
    eprintln!("With no command, prints ROM info and a sample of English strings.");
}

fn parse_number(value: &str) -> Option<u32> {
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        value.parse().ok()
    }
}

fn run(args: &[String]) -> Result<()> {
    let rom_path = args.get(1).ok_or(RomError::MissingInput)?;
    let reader = RomReader::open(rom_path)?;

    match args.get(2).map(String::as_str) {
        None => {
            println!("ROM: {}", reader.rom_name().unwrap_or("<unnamed>"));
            println!("Size: {} bytes", reader.image().len());
            println!("Languages: {}", Language::ALL.len());
            println!("Strings per language: {}", STRING_COUNT);

            println!("\nSample English strings (first 10 non-empty):");
            let mut shown = 0;
            for string_id in 0..STRING_COUNT {
                let text = reader.fetch_string(0, string_id)?;
                if text.is_empty() {
                    continue;
                }
                println!("  {:#X}: {}", string_id, text.replace('\n', " / "));
                shown += 1;
                if shown == 10 {
                    break;
                }
            }
            Ok(())
        }
        Some("fetch") => {
            let language_id = args.get(3).and_then(|v| parse_number(v));
            let string_id = args.get(4).and_then(|v| parse_number(v));
            match (language_id, string_id) {
                (Some(language_id), Some(string_id)) => {
                    println!("{}", reader.fetch_string(language_id, string_id)?);
                    Ok(())
                }
                _ => {
                    eprintln!("ERROR: fetch requires a numeric <LANG> and <ID>.");
                    std::process::exit(1);
                }
            }
        }
        Some("export") => {
            let out_path = args.get(3).map(String::as_str).unwrap_or("StringFetcher.json");
            let export = reader.export_all()?;
            fs::write(out_path, export::to_pretty_json(&export)?)?;
            println!("Exported all strings to {}", out_path);
            Ok(())
        }
        Some(other) => {
            eprintln!("ERROR: unknown command '{}'.", other);
            usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage(args.first().map(String::as_str).unwrap_or("gba-strings"));
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
