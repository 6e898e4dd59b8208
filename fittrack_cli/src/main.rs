use clap::Parser;
use fittrack_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Personal fitness metrics tracker", long_about = None)]
struct Cli {
    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    fittrack_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let data_path = data_dir.join(USER_DATA_FILE);

    let mut roster = load_all(&data_path)?;
    run_menu(&mut roster, &data_path)
}

fn run_menu(roster: &mut Roster, data_path: &Path) -> Result<()> {
    loop {
        print_menu();

        // End of input behaves like choosing Exit
        let choice = match prompt_parsed::<i32>("Choose an option: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                save(roster, data_path);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match choice {
            1 => add_user(roster)?,
            2 => display_users(roster),
            3 => update_user(roster)?,
            4 => log_water_and_sleep(roster)?,
            5 => log_calories(roster)?,
            6 => {
                save(roster, data_path);
                println!("Data saved successfully!");
            }
            7 => {
                save(roster, data_path);
                return Ok(());
            }
            _ => println!("Invalid option, try again!"),
        }
    }
}

fn print_menu() {
    println!();
    println!("Fitness Tracker Menu");
    println!("1. Add User");
    println!("2. Display All Users");
    println!("3. Update User");
    println!("4. Log Water and Sleep");
    println!("5. Log Calories");
    println!("6. Save Data");
    println!("7. Exit");
}

fn add_user(roster: &mut Roster) -> Result<()> {
    let name = prompt_line("Enter your name: ")?;
    let weight: f32 = prompt_parsed("Enter your weight (kg): ")?;
    let height = prompt_line("Enter your height (cm): ")?;
    let age: i32 = prompt_parsed("Enter your age: ")?;
    let bench: i32 = prompt_parsed("Enter your max bench press (kg): ")?;
    let squat: i32 = prompt_parsed("Enter your max squat (kg): ")?;
    let deadlift: i32 = prompt_parsed("Enter your max deadlift (kg): ")?;
    let calories: i32 = prompt_parsed("Enter your daily calorie intake: ")?;
    let diet = prompt_line("Enter your diet type (Veg/Non-Veg): ")?;

    let record = UserRecord::new(
        name, weight, height, age, bench, squat, deadlift, calories, diet,
    );

    let advice = record.protein_recommendation();
    if advice.non_veg {
        println!(
            "Recommended protein intake for non-vegetarian diet: {} grams",
            advice.grams
        );
    } else {
        println!(
            "Recommended protein intake for vegetarian diet: {} grams",
            advice.grams
        );
    }
    println!(
        "Recommended daily calorie intake: {} calories",
        record.recommended_calories
    );

    roster.add(record);
    Ok(())
}

fn display_users(roster: &Roster) {
    if roster.is_empty() {
        println!("No users available.");
        return;
    }

    for user in roster.records() {
        println!("User: {}", user.name);
        println!("Weight: {} kg", user.weight);
        println!("Height: {}", user.height);
        println!("Age: {} years", user.age);
        println!("Max Bench: {} kg", user.max_bench);
        println!("Max Squat: {} kg", user.max_squat);
        println!("Max Deadlift: {} kg", user.max_deadlift);
        println!("BMI: {:.2}", user.bmi);
        println!("Daily Calories Intake: {} kcal", user.current_calories);
        println!("Diet: {}", user.diet_type);
        println!();
    }
}

fn update_user(roster: &mut Roster) -> Result<()> {
    let name = prompt_line("Enter the name of the user to update: ")?;
    if roster.find_by_name(&name).is_none() {
        println!("User not found!");
        return Ok(());
    }

    println!("Select field to update:");
    println!("1. Weight");
    println!("2. Height");
    println!("3. Age");
    println!("4. Max Bench");
    println!("5. Max Squat");
    println!("6. Max Deadlift");
    println!("7. Calorie Intake");
    let choice: i32 = prompt_parsed("Enter choice: ")?;

    let update = match choice {
        1 => FieldUpdate::Weight(prompt_parsed("Enter new weight: ")?),
        2 => FieldUpdate::Height(prompt_line("Enter new height: ")?),
        3 => FieldUpdate::Age(prompt_parsed("Enter new age: ")?),
        4 => FieldUpdate::MaxBench(prompt_parsed("Enter new max bench: ")?),
        5 => FieldUpdate::MaxSquat(prompt_parsed("Enter new max squat: ")?),
        6 => FieldUpdate::MaxDeadlift(prompt_parsed("Enter new max deadlift: ")?),
        7 => FieldUpdate::Calories(prompt_parsed("Enter your new daily calorie intake: ")?),
        _ => {
            println!("Invalid choice.");
            return Ok(());
        }
    };

    match roster.update_by_name(&name, update) {
        Ok(Some(change)) => print_bmi_change(&change),
        Ok(None) => {}
        Err(_) => println!("User not found!"),
    }
    Ok(())
}

fn print_bmi_change(change: &BmiChange) {
    print!("\nBMI Change Detected: ");
    match change.direction {
        BmiDirection::Increased => println!("BMI Increased"),
        BmiDirection::Decreased => println!("BMI Decreased"),
    }
    println!(
        "Old BMI: {:.2}, New BMI: {:.2}",
        change.old_bmi, change.new_bmi
    );

    match change.adjustment {
        None => println!("You are in the healthy weight range!"),
        Some(WeightAdjustment::Gain(kg)) => {
            println!("You are NOT in the healthy weight range!");
            println!(
                "You need to GAIN approximately {:.1} kg to reach a healthy BMI.",
                kg
            );
        }
        Some(WeightAdjustment::Lose(kg)) => {
            println!("You are NOT in the healthy weight range!");
            println!(
                "You need to LOSE approximately {:.1} kg to reach a healthy BMI.",
                kg
            );
        }
    }
}

fn log_water_and_sleep(roster: &mut Roster) -> Result<()> {
    let name = prompt_line("Enter the name of the user to log water and sleep for: ")?;
    if roster.find_by_name(&name).is_none() {
        println!("User not found!");
        return Ok(());
    }

    let liters: f32 = prompt_parsed("Enter today's water intake (liters): ")?;
    let hours: i32 = prompt_parsed("Enter today's sleep hours: ")?;

    roster.log_water_and_sleep_by_name(&name, liters, hours)?;
    println!("Water and sleep logged!");
    Ok(())
}

fn log_calories(roster: &mut Roster) -> Result<()> {
    let name = prompt_line("Enter the name of the user to log calories for: ")?;
    if roster.find_by_name(&name).is_none() {
        println!("User not found!");
        return Ok(());
    }

    let mut entries = Vec::new();
    loop {
        let food = prompt_line("Enter food item (or type 'done' to finish): ")?;
        if food == "done" {
            break;
        }

        let grams: f32 = prompt_parsed(&format!("Enter the grams of {} you ate: ", food))?;
        let calories: f32 =
            prompt_parsed(&format!("Enter the calories per 100g of {}: ", food))?;

        entries.push(FoodEntry {
            name: food,
            grams,
            calories_per_100g: calories,
        });
    }

    let total = roster.log_calories_by_name(&name, &entries)?;
    println!("Total calories for today: {} kcal", total);
    Ok(())
}

fn save(roster: &Roster, data_path: &Path) {
    // A failed save is logged and otherwise tolerated
    if let Err(e) = save_all(data_path, roster) {
        tracing::warn!("Failed to save user data to {:?}: {}", data_path, e);
    }
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_parsed<T: FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}
