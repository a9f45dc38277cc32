use outta_core::events::{Category, Event};
use outta_core::ids::EventId;

/// The bundled demo catalog: a spread of Delhi events across the
/// category set, in the order the explore deck presents them.
pub fn demo_events() -> Vec<Event> {
    let raw: Vec<(&str, &str, Category, &str, &str, &str, &str, &str, u32, u32, u32)> = vec![
        (
            "evt_demo_01",
            "Rooftop Networking at CP",
            Category::Networking,
            "Meet founders and folks who just moved to the city over sundowners.",
            "Social CP",
            "Connaught Place",
            "Today \u{2022} 7:30 PM",
            "\u{20b9}499",
            80,
            58,
            3,
        ),
        (
            "evt_demo_02",
            "Indie Music Fest",
            Category::Music,
            "Twelve independent acts across two open-air stages.",
            "Zorba",
            "Mehrauli",
            "Mar 7 \u{2022} 6:00 PM",
            "\u{20b9}999",
            200,
            150,
            1,
        ),
        (
            "evt_demo_03",
            "Chandni Chowk Food Walk",
            Category::FoodAndDrink,
            "Paranthe Wali Gali to Jama Masjid, one stall at a time. Go on an empty stomach.",
            "Chandni Chowk",
            "Old Delhi",
            "Tomorrow \u{2022} 10:00 AM",
            "\u{20b9}450",
            25,
            19,
            2,
        ),
        (
            "evt_demo_04",
            "Sunrise Yoga at Lodhi Garden",
            Category::Fitness,
            "Open-level vinyasa among the tombs. Bring a mat and a water bottle.",
            "Lodhi Garden",
            "Lutyens' Delhi",
            "Sun \u{2022} 6:00 AM",
            "Free",
            60,
            22,
            0,
        ),
        (
            "evt_demo_05",
            "Contemporary Art Walk",
            Category::Art,
            "Guided tour of three galleries and a sculpture court.",
            "National Gallery of Modern Art",
            "India Gate",
            "Mar 12 \u{2022} 4:00 PM",
            "\u{20b9}150",
            35,
            12,
            0,
        ),
        (
            "evt_demo_06",
            "Stand-up Comedy Night",
            Category::Comedy,
            "Five comics, one headliner, zero heckling (probably).",
            "The Laugh Factory",
            "Saket",
            "Feb 28 \u{2022} 8:00 PM",
            "\u{20b9}599",
            120,
            96,
            2,
        ),
        (
            "evt_demo_07",
            "Pottery Workshop",
            Category::Workshop,
            "Throw your first bowl on the wheel; clay and firing included.",
            "Studio Mitti",
            "Hauz Khas Village",
            "Mar 8 \u{2022} 3:00 PM",
            "\u{20b9}1,200",
            15,
            11,
            0,
        ),
        (
            "evt_demo_08",
            "Holi Color Festival",
            Category::Festival,
            "Organic colors, rain dance, food trucks, and a dhol line.",
            "Chattarpur Farm",
            "Chattarpur",
            "Mar 14 \u{2022} 10:00 AM",
            "\u{20b9}799",
            400,
            280,
            4,
        ),
        (
            "evt_demo_09",
            "Night Cycling Tour",
            Category::Sports,
            "A 20 km loop past the monuments after the traffic dies down.",
            "India Gate",
            "Central Delhi",
            "Mar 8 \u{2022} 10:00 PM",
            "\u{20b9}199",
            40,
            28,
            1,
        ),
        (
            "evt_demo_10",
            "Sound Healing Session",
            Category::Wellness,
            "An hour of singing bowls and guided breath work.",
            "The Quiet Room",
            "Greater Kailash",
            "Mar 5 \u{2022} 7:00 PM",
            "\u{20b9}350",
            25,
            9,
            0,
        ),
        (
            "evt_demo_11",
            "Delhi Tech Conference",
            Category::Tech,
            "Talks on infra, payments, and whatever the big labs shipped last week.",
            "The Leela Palace",
            "Chanakyapuri",
            "Mar 15 \u{2022} 9:00 AM",
            "\u{20b9}2,499",
            500,
            350,
            2,
        ),
        (
            "evt_demo_12",
            "Book Club at Bahrisons",
            Category::Social,
            "This month: a short story collection. Finish reading before you come!",
            "Bahrisons Booksellers",
            "Khan Market",
            "Mar 8 \u{2022} 11:00 AM",
            "Free",
            20,
            14,
            1,
        ),
    ];

    raw.into_iter()
        .map(
            |(
                id,
                title,
                category,
                description,
                location,
                area,
                date,
                price,
                capacity,
                attending,
                friends_interested,
            )| Event {
                id: EventId::from_raw(id),
                title: title.to_string(),
                category,
                description: description.to_string(),
                location: location.to_string(),
                area: area.to_string(),
                date: date.to_string(),
                price: price.to_string(),
                capacity,
                attending,
                friends_interested,
                image_url: format!("https://cdn.outtacouch.app/events/{id}.jpg"),
            },
        )
        .collect()
}
