use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::DataExploration;

/// Each task is `(question, expected answer, solution snippet)`.
fn explore(instructions: &str, dataset: Value, tasks: &[(&str, &str, &str)]) -> Value {
  let tasks: Vec<Value> = tasks
    .iter()
    .enumerate()
    .map(|(i, (question, answer, code))| json!({ "id": i + 1, "question": question, "expected": answer, "solution": code }))
    .collect();
  json!({ "instructions": instructions, "dataset": dataset, "tasks": tasks })
}

fn settings() -> Value {
  json!({ "language": "python", "allowRetry": true, "showDataPreview": true, "previewRows": 5, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: explore(
        "The list temps holds a week of daily temperatures. Answer each question with Python.",
        json!([18, 21, 19, 25, 23, 17, 20]),
        &[
          ("What is the highest temperature?", "25", "max(temps)"),
          ("What is the lowest temperature?", "17", "min(temps)"),
          ("How many days were recorded?", "7", "len(temps)"),
          ("What is the total of all temperatures?", "143", "sum(temps)"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 1, 1, "Exploring a Week of Temperatures with Python",
        "Learn to answer simple questions about a list of numbers using built-in functions.",
        &["python", "data-exploration", "lists", "built-ins", "beginner"])
    },
    Activity {
      content: explore(
        "The list words holds a short text split into words.",
        json!(["the", "cat", "sat", "on", "the", "mat"]),
        &[
          ("How many words are there?", "6", "len(words)"),
          ("How many distinct words?", "5", "len(set(words))"),
          ("How often does \"the\" appear?", "2", "words.count(\"the\")"),
          ("What is the longest word length?", "3", "max(len(w) for w in words)"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 2, 1, "Word Counting Data Exploration",
        "Practice counting, deduplicating and measuring words in a small text dataset.",
        &["python", "data-exploration", "strings", "beginner"])
    },
    Activity {
      content: explore(
        "scores maps students to test scores.",
        json!({ "ana": 88, "ben": 72, "cy": 95, "dee": 64 }),
        &[
          ("Who scored highest?", "cy", "max(scores, key=scores.get)"),
          ("What is the average score?", "79.75", "sum(scores.values()) / len(scores)"),
          ("How many students scored 70 or more?", "3", "sum(1 for s in scores.values() if s >= 70)"),
          ("List the names in alphabetical order.", "['ana', 'ben', 'cy', 'dee']", "sorted(scores)"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 3, 1, "Student Scores: Essential Dictionary Analysis",
        "Understand how to summarize data stored in a dictionary with max, sum and comprehensions.",
        &["python", "data-exploration", "dictionaries", "beginner", "fundamentals"])
    },
    Activity {
      content: explore(
        "sales is a list of (month, amount) tuples.",
        json!([["Jan", 120], ["Feb", 90], ["Mar", 150], ["Apr", 130], ["May", 170], ["Jun", 110]]),
        &[
          ("What were total sales?", "770", "sum(a for _, a in sales)"),
          ("Which month had the best sales?", "May", "max(sales, key=lambda s: s[1])[0]"),
          ("Which months beat 125?", "['Mar', 'Apr', 'May']", "[m for m, a in sales if a > 125]"),
          ("What is the month-over-month change from Jan to Feb?", "-30", "sales[1][1] - sales[0][1]"),
          ("What is the average monthly sale, rounded?", "128", "round(sum(a for _, a in sales) / len(sales))"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 4, 2, "Monthly Sales Analysis with Tuples and Lambdas",
        "Explore a small sales dataset and learn to filter, aggregate and rank records.",
        &["python", "data-exploration", "tuples", "lambda", "intermediate"])
    },
    Activity {
      content: explore(
        "people is a list of dicts with name, age and city.",
        json!([
          { "name": "Ana", "age": 31, "city": "Lima" },
          { "name": "Ben", "age": 25, "city": "Oslo" },
          { "name": "Cy", "age": 42, "city": "Lima" },
          { "name": "Dee", "age": 19, "city": "Rome" },
          { "name": "Eli", "age": 35, "city": "Oslo" }
        ]),
        &[
          ("How many people live in Lima?", "2", "sum(1 for p in people if p[\"city\"] == \"Lima\")"),
          ("Who is the youngest?", "Dee", "min(people, key=lambda p: p[\"age\"])[\"name\"]"),
          ("What is the average age?", "30.4", "sum(p[\"age\"] for p in people) / len(people)"),
          ("Group names by city.", "{'Lima': ['Ana', 'Cy'], 'Oslo': ['Ben', 'Eli'], 'Rome': ['Dee']}",
            "from collections import defaultdict\nby_city = defaultdict(list)\nfor p in people:\n    by_city[p[\"city\"]].append(p[\"name\"])"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 5, 2, "Exploring Records: Lists of Dictionaries",
        "Practice filtering and grouping a list of records, the most common shape of real-world data.",
        &["python", "data-exploration", "dictionaries", "grouping", "intermediate"])
    },
    Activity {
      content: explore(
        "log holds web-server status codes from one minute of traffic.",
        json!([200, 200, 404, 200, 500, 301, 200, 404, 200, 503]),
        &[
          ("How many requests succeeded (2xx)?", "5", "sum(1 for c in log if 200 <= c < 300)"),
          ("What is the most common status code?", "200", "Counter(log).most_common(1)[0][0]"),
          ("What fraction were server errors (5xx)?", "0.2", "sum(1 for c in log if c >= 500) / len(log)"),
          ("Which distinct codes appeared, sorted?", "[200, 301, 404, 500, 503]", "sorted(set(log))"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 6, 2, "Server Log Status Code Explorer",
        "Learn to count and classify events with collections.Counter and comprehensions.",
        &["python", "data-exploration", "collections", "counter", "intermediate"])
    },
    Activity {
      content: explore(
        "csv_text contains a small CSV file. Parse it with the csv module first.",
        json!("product,price,qty\npen,1.50,10\nbook,12.00,2\nbag,25.00,1\nink,3.25,4\n"),
        &[
          ("How many product rows are there?", "4", "rows = list(csv.DictReader(io.StringIO(csv_text)))\nlen(rows)"),
          ("What is the total stock value?", "77.0", "sum(float(r[\"price\"]) * int(r[\"qty\"]) for r in rows)"),
          ("Which product is most expensive?", "bag", "max(rows, key=lambda r: float(r[\"price\"]))[\"product\"]"),
          ("Which products have more than 3 in stock?", "['pen', 'ink']", "[r[\"product\"] for r in rows if int(r[\"qty\"]) > 3]"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 7, 3, "Parsing and Analyzing CSV Data in Python",
        "Master the csv module by parsing a product list and computing totals and rankings.",
        &["python", "data-exploration", "csv", "files", "advanced"])
    },
    Activity {
      content: explore(
        "orders is a JSON document loaded with json.loads.",
        json!({ "orders": [
          { "id": 1, "customer": "ana", "items": [{ "sku": "A1", "qty": 2, "price": 5.0 }] },
          { "id": 2, "customer": "ben", "items": [{ "sku": "B2", "qty": 1, "price": 20.0 }, { "sku": "A1", "qty": 1, "price": 5.0 }] },
          { "id": 3, "customer": "ana", "items": [{ "sku": "C3", "qty": 3, "price": 2.5 }] }
        ] }),
        &[
          ("How many orders are there?", "3", "len(data[\"orders\"])"),
          ("What is the revenue of order 2?", "25.0", "sum(i[\"qty\"] * i[\"price\"] for i in data[\"orders\"][1][\"items\"])"),
          ("Which customer ordered most often?", "ana", "Counter(o[\"customer\"] for o in data[\"orders\"]).most_common(1)[0][0]"),
          ("How many units of A1 were sold?", "3", "sum(i[\"qty\"] for o in data[\"orders\"] for i in o[\"items\"] if i[\"sku\"] == \"A1\")"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 8, 3, "Nested JSON Data Exploration Challenge",
        "Understand how to navigate nested JSON structures and aggregate values across levels.",
        &["python", "data-exploration", "json", "nested-data", "advanced"])
    },
    Activity {
      content: explore(
        "readings holds sensor readings with timestamps; some values are missing (None).",
        json!([
          { "t": "08:00", "value": 12.1 }, { "t": "08:05", "value": null }, { "t": "08:10", "value": 12.9 },
          { "t": "08:15", "value": 13.4 }, { "t": "08:20", "value": null }, { "t": "08:25", "value": 14.0 }
        ]),
        &[
          ("How many readings are missing?", "2", "sum(1 for r in readings if r[\"value\"] is None)"),
          ("What is the mean of the present values?", "13.1", "vals = [r[\"value\"] for r in readings if r[\"value\"] is not None]\nround(sum(vals) / len(vals), 1)"),
          ("Fill gaps with the previous value; what is the 08:20 value?", "13.4", "last = None\nfor r in readings:\n    if r[\"value\"] is None:\n        r[\"value\"] = last\n    last = r[\"value\"]"),
          ("What is the largest jump between consecutive present values?", "0.8", "max(round(b - a, 1) for a, b in zip(vals, vals[1:]))"),
          ("Which timestamps exceed 13.0 after filling?", "['08:15', '08:20', '08:25']", "[r[\"t\"] for r in readings if r[\"value\"] > 13.0]"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 9, 4, "Cleaning Messy Sensor Data: Mastering Missing Values",
        "Master data cleaning by detecting, filling and analyzing missing values in a time series.",
        &["python", "data-exploration", "data-cleaning", "expert"])
    },
    Activity {
      content: explore(
        "trips lists taxi trips with distance (km), minutes and fare. Explore the relationships.",
        json!([
          { "km": 2.0, "min": 8, "fare": 7.5 }, { "km": 5.5, "min": 15, "fare": 14.0 }, { "km": 1.2, "min": 6, "fare": 5.5 },
          { "km": 9.0, "min": 25, "fare": 22.0 }, { "km": 3.3, "min": 11, "fare": 9.5 }, { "km": 12.0, "min": 30, "fare": 28.0 }
        ]),
        &[
          ("What is the average fare per km, rounded to 2 places?", "2.65", "round(sum(t[\"fare\"] for t in trips) / sum(t[\"km\"] for t in trips), 2)"),
          ("Which trip had the highest fare per minute?", "the 12.0 km trip", "max(trips, key=lambda t: t[\"fare\"] / t[\"min\"])"),
          ("Sort trips by distance and list fares.", "[5.5, 7.5, 9.5, 14.0, 22.0, 28.0]", "[t[\"fare\"] for t in sorted(trips, key=lambda t: t[\"km\"])]"),
          ("Does fare always increase with distance?", "True", "fares = [t[\"fare\"] for t in sorted(trips, key=lambda t: t[\"km\"])]\nall(a < b for a, b in zip(fares, fares[1:]))"),
          ("Bucket trips into short (<3 km), medium and long (>8 km) counts.", "{'short': 2, 'medium': 2, 'long': 2}", "Counter(\"short\" if t[\"km\"] < 3 else \"long\" if t[\"km\"] > 8 else \"medium\" for t in trips)"),
        ],
      ),
      settings: settings(),
      ..activity(KIND, 10, 4, "Ultimate Taxi Trips Data Exploration Challenge",
        "Explore relationships between distance, time and price and learn to answer analytical questions with plain Python.",
        &["python", "data-exploration", "data-analysis", "expert", "problem-solving"])
    },
  ]
}
