use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kennel::api::{
    CmdMessage, ConfigAction, DogUpdate, KennelApi, KennelPaths, MessageLevel, NewDog,
};
use kennel::error::{KennelError, Result};
use kennel::model::{Breed, Dog, Sex};
use kennel::query::Field;
use kennel::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod logger;
use args::{BreedCommands, Cli, Commands, WishCommands};

const HOME_ENV: &str = "KENNEL_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KennelApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            sex,
            breed,
            age,
            weight,
            price,
            ready,
            id,
            image,
        }) => {
            let new_dog = NewDog {
                id,
                name,
                sex: sex.parse()?,
                breed,
                age,
                weight,
                price,
                ready,
                image,
            };
            handle_add(&mut ctx, new_dog)
        }
        Some(Commands::Remove { ids }) => handle_remove(&mut ctx, ids),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::List { all }) => handle_list(&ctx, all),
        Some(Commands::Home) | None => handle_home(&ctx),
        Some(Commands::Search {
            name,
            sex,
            breed,
            age,
            weight,
            price,
            sort,
            desc,
        }) => {
            let filters = [
                (Field::Name, name),
                (Field::Sex, sex),
                (Field::Breed, breed),
                (Field::Age, age),
                (Field::Weight, weight),
                (Field::Price, price),
            ];
            handle_search(&ctx, filters, sort, desc)
        }
        Some(Commands::Rename { id, name }) => handle_update(&mut ctx, &id, DogUpdate::Name(name)),
        Some(Commands::SetAge { id, age }) => handle_update(&mut ctx, &id, DogUpdate::Age(age)),
        Some(Commands::SetWeight { id, weight }) => {
            handle_update(&mut ctx, &id, DogUpdate::Weight(weight))
        }
        Some(Commands::SetPrice { id, price }) => {
            handle_update(&mut ctx, &id, DogUpdate::Price(price))
        }
        Some(Commands::Ready { id, no }) => handle_update(&mut ctx, &id, DogUpdate::Ready(!no)),
        Some(Commands::Wish { action }) => handle_wish(&mut ctx, action),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Breeds { action }) => handle_breeds(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "kennel", "kennel")
        .ok_or_else(|| KennelError::Api("Could not determine data dir".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    tracing::debug!(data_dir = %data_dir.display(), "using data dir");

    let store = FileStore::new(data_dir.clone());
    let api = KennelApi::new(store, KennelPaths { data_dir });
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, new_dog: NewDog) -> Result<()> {
    let result = ctx.api.add_dog(new_dog)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.remove_dogs(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_dog(id)?;
    for dog in &result.listed_dogs {
        print_full_dog(dog);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.list_dogs(all)?;
    print_dogs(&result.listed_dogs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.home()?;
    print_dogs(&result.listed_dogs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &AppContext,
    filters: [(Field, Option<String>); 6],
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    // An explicit --sort without --desc means ascending, not the configured order.
    let ascending = match (&sort, desc) {
        (_, true) => Some(false),
        (Some(_), false) => Some(true),
        (None, false) => None,
    };
    let result = ctx.api.search_dogs(filters, sort.as_deref(), ascending)?;
    if !result.listed_dogs.is_empty() {
        print_dogs(&result.listed_dogs);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, update: DogUpdate) -> Result<()> {
    let result = ctx.api.update_dog(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_wish(ctx: &mut AppContext, action: WishCommands) -> Result<()> {
    let result = match action {
        WishCommands::Add { id } => ctx.api.wish(&id)?,
        WishCommands::Remove { id } => ctx.api.unwish(&id)?,
        WishCommands::List => {
            let result = ctx.api.wishlist()?;
            if !result.listed_dogs.is_empty() {
                print_dogs(&result.listed_dogs);
            }
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_wishlist(path.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_breeds(ctx: &mut AppContext, action: BreedCommands) -> Result<()> {
    let result = match action {
        BreedCommands::Import { file } => ctx.api.import_breeds(&file)?,
        BreedCommands::List => {
            let result = ctx.api.breeds()?;
            print_breeds(&result.breeds);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in kennel::config::KennelConfig::keys() {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 8] = ["ID", "NAME", "SEX", "BREED", "AGE", "WEIGHT", "PRICE", "READY"];

fn dog_row(dog: &Dog) -> [String; 8] {
    [
        dog.id().to_string(),
        dog.name().to_string(),
        dog.sex().to_string(),
        dog.breed().name.clone(),
        dog.age().to_string(),
        format!("{:.1}", dog.weight()),
        format!("{:.2}", dog.price()),
        if dog.is_ready() { "yes" } else { "no" }.to_string(),
    ]
}

fn print_dogs(dogs: &[Dog]) {
    if dogs.is_empty() {
        println!("No dogs found.");
        return;
    }

    let rows: Vec<[String; 8]> = dogs.iter().map(dog_row).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    println!("{}", header.join("  ").bold());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn print_full_dog(dog: &Dog) {
    let sex = match dog.sex() {
        Sex::Male => "Male",
        Sex::Female => "Female",
    };
    println!("{} {}", dog.id().yellow(), dog.name().bold());
    println!("--------------------------------");
    println!("Sex:     {}", sex);
    println!("Breed:   {}", dog.breed().name);
    println!("Age:     {}", dog.age());
    println!("Weight:  {:.1} lb", dog.weight());
    println!("Price:   {:.2}", dog.price());
    if let Some(image) = dog.image() {
        println!("Image:   {}", image);
    }
    println!(
        "Status:  {}",
        if dog.is_ready() {
            "ready for adoption".green()
        } else {
            "not ready".dimmed()
        }
    );
    print_breed_details(dog.breed());
}

fn print_breed_details(breed: &Breed) {
    if !breed.description.is_empty() {
        println!();
        println!("{}", breed.description);
    }
    if breed.life_max > 0 {
        println!("Life expectancy: {}-{} years", breed.life_min, breed.life_max);
    }
    if breed.hypoallergenic {
        println!("Hypoallergenic");
    }
}

fn print_breeds(breeds: &[Breed]) {
    let width = breeds.iter().map(|b| b.name.width()).max().unwrap_or(0);
    for breed in breeds {
        println!(
            "{}  {}",
            pad_to_width(&breed.name, width),
            format!(
                "life {}-{}y, male {}-{}lb, female {}-{}lb",
                breed.life_min,
                breed.life_max,
                breed.male_weight_min,
                breed.male_weight_max,
                breed.female_weight_min,
                breed.female_weight_max
            )
            .dimmed()
        );
    }
}
