use rand::Rng;
use std::fmt;

pub const CATEGORIES: [Category; 3] = [Category::Car, Category::Motorcycle, Category::Truck];

pub const COLORS: [&str; 6] = ["black", "white", "silver", "red", "blue", "gray"];

pub const FIRST_YEAR: u16 = 2015;
pub const LAST_YEAR: u16 = 2023;

const CAR_MODELS: [&str; 4] = [
    "Fiat Uno",
    "Chevrolet Onix",
    "Volkswagen Gol",
    "Hyundai HB20",
];
const MOTORCYCLE_MODELS: [&str; 4] = [
    "Honda CG 160",
    "Yamaha Fazer 250",
    "Honda Biz",
    "Kawasaki Ninja",
];
const TRUCK_MODELS: [&str; 3] = [
    "Volkswagen Constellation",
    "Scania R440",
    "Mercedes-Benz Atego",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Category {
    Car,
    Motorcycle,
    Truck,
}

impl Category {
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Category::Car => &CAR_MODELS,
            Category::Motorcycle => &MOTORCYCLE_MODELS,
            Category::Truck => &TRUCK_MODELS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Motorcycle => "motorcycle",
            Category::Truck => "truck",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Made-up vehicle shown on a notice. Nothing ties it to the reading.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VehicleFixture {
    pub category: Category,
    pub model: &'static str,
    pub color: &'static str,
    pub year: u16,
    pub plate: String,
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Builds a plate in the `LLL-NNNN` format.
pub fn random_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letters: String = (0..3).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
    let number: u16 = rng.gen_range(1000..=9999);
    format!("{}-{}", letters, number)
}

pub fn random_vehicle<R: Rng + ?Sized>(rng: &mut R) -> VehicleFixture {
    let category = pick(rng, &CATEGORIES);
    let model = pick(rng, category.models());
    let color = pick(rng, &COLORS);
    let year = rng.gen_range(FIRST_YEAR..=LAST_YEAR);
    let plate = random_plate(rng);

    VehicleFixture {
        category,
        model,
        color,
        year,
        plate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_plate(plate: &str) -> bool {
        let bytes = plate.as_bytes();
        bytes.len() == 8
            && bytes[..3].iter().all(|b| b.is_ascii_uppercase())
            && bytes[3] == b'-'
            && bytes[4..].iter().all(|b| b.is_ascii_digit())
            && bytes[4] != b'0'
    }

    #[test]
    fn test_fixture_fields_are_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let vehicle = random_vehicle(&mut rng);
            assert!(CATEGORIES.contains(&vehicle.category));
            assert!(
                vehicle.category.models().contains(&vehicle.model),
                "{} is not a {}",
                vehicle.model,
                vehicle.category
            );
            assert!(COLORS.contains(&vehicle.color));
            assert!((FIRST_YEAR..=LAST_YEAR).contains(&vehicle.year));
            assert!(is_plate(&vehicle.plate), "bad plate {}", vehicle.plate);
        }
    }

    #[test]
    fn test_same_seed_same_fixture() {
        let mut a = StdRng::seed_from_u64(2023);
        let mut b = StdRng::seed_from_u64(2023);
        for _ in 0..10 {
            assert_eq!(random_vehicle(&mut a), random_vehicle(&mut b));
        }
    }

    #[test]
    fn test_every_category_shows_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: Vec<Category> = (0..200).map(|_| random_vehicle(&mut rng).category).collect();
        for category in CATEGORIES {
            assert!(seen.contains(&category), "never generated {}", category);
        }
    }

    #[test]
    fn test_model_lists() {
        assert_eq!(Category::Car.models().len(), 4);
        assert_eq!(Category::Motorcycle.models().len(), 4);
        assert_eq!(Category::Truck.models(), &TRUCK_MODELS);
    }
}
