use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::ClassBuilder;

fn blueprint(class_name: &str, instructions: &str, requirements: &[&str], starter: &str, solution: &str, checks: &[&str]) -> Value {
  json!({
    "className": class_name,
    "instructions": instructions,
    "requirements": requirements,
    "starterCode": starter,
    "solution": solution,
    "checks": checks,
  })
}

fn settings() -> Value {
  json!({ "language": "python", "allowRetry": true, "showUmlDiagram": true, "runChecks": true, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: blueprint("Dog",
        "Build a Dog class that stores a name and can bark.",
        &["__init__ takes name", "store name on self", "bark() returns \"<name> says woof\"", "two dogs keep separate names"],
        "class Dog:\n    pass\n",
        "class Dog:\n    def __init__(self, name):\n        self.name = name\n\n    def bark(self):\n        return f\"{self.name} says woof\"\n",
        &["Dog(\"Rex\").bark() == \"Rex says woof\"", "Dog(\"A\").name != Dog(\"B\").name"]),
      settings: settings(),
      ..activity(KIND, 1, 1, "Your First Python Class: Build a Dog",
        "Learn to define a class with an initializer and a method, then create instances of it.",
        &["python", "class-builder", "classes", "beginner", "oop"])
    },
    Activity {
      content: blueprint("Rectangle",
        "Build a Rectangle with width and height and methods for area and perimeter.",
        &["__init__ takes width and height", "area() returns width * height", "perimeter() returns 2 * (width + height)", "is_square() compares sides"],
        "class Rectangle:\n    def __init__(self, width, height):\n        pass\n",
        "class Rectangle:\n    def __init__(self, width, height):\n        self.width = width\n        self.height = height\n\n    def area(self):\n        return self.width * self.height\n\n    def perimeter(self):\n        return 2 * (self.width + self.height)\n\n    def is_square(self):\n        return self.width == self.height\n",
        &["Rectangle(2, 3).area() == 6", "Rectangle(2, 3).perimeter() == 10", "Rectangle(4, 4).is_square()"]),
      settings: settings(),
      ..activity(KIND, 2, 1, "Build a Rectangle Class with Methods",
        "Practice instance attributes and methods that compute values from them.",
        &["python", "class-builder", "methods", "beginner"])
    },
    Activity {
      content: blueprint("Counter",
        "Build a Counter that can increment, decrement and reset.",
        &["starts at 0 unless a start value is given", "increment() adds 1", "decrement() never goes below 0", "reset() returns to the start value"],
        "class Counter:\n    pass\n",
        "class Counter:\n    def __init__(self, start=0):\n        self.start = start\n        self.value = start\n\n    def increment(self):\n        self.value += 1\n\n    def decrement(self):\n        self.value = max(0, self.value - 1)\n\n    def reset(self):\n        self.value = self.start\n",
        &["c = Counter(); c.increment(); c.value == 1", "c = Counter(); c.decrement(); c.value == 0"]),
      settings: settings(),
      ..activity(KIND, 3, 1, "Counter Class Essentials",
        "Understand how methods change object state by building a small counter with default arguments.",
        &["python", "class-builder", "state", "beginner", "fundamentals"])
    },
    Activity {
      content: blueprint("BankAccount",
        "Build a BankAccount that rejects invalid withdrawals.",
        &["owner and balance attributes", "deposit(amount) rejects non-positive amounts", "withdraw(amount) raises ValueError on insufficient funds", "__repr__ shows owner and balance"],
        "class BankAccount:\n    def __init__(self, owner, balance=0):\n        pass\n",
        "class BankAccount:\n    def __init__(self, owner, balance=0):\n        self.owner = owner\n        self.balance = balance\n\n    def deposit(self, amount):\n        if amount <= 0:\n            raise ValueError(\"amount must be positive\")\n        self.balance += amount\n\n    def withdraw(self, amount):\n        if amount > self.balance:\n            raise ValueError(\"insufficient funds\")\n        self.balance -= amount\n\n    def __repr__(self):\n        return f\"BankAccount({self.owner!r}, {self.balance})\"\n",
        &["a = BankAccount(\"Ada\", 10); a.withdraw(5); a.balance == 5", "BankAccount(\"Ada\").withdraw(1) raises ValueError"]),
      settings: settings(),
      ..activity(KIND, 4, 2, "Build a Python Bank Account with Validation",
        "Practice guarding object state with validation and exceptions in a bank-account class.",
        &["python", "class-builder", "exceptions", "intermediate", "oop"])
    },
    Activity {
      content: blueprint("Temperature",
        "Build a Temperature class with a celsius property and a computed fahrenheit property.",
        &["store celsius privately", "celsius property with validation below -273.15", "fahrenheit read-only property", "from_fahrenheit classmethod"],
        "class Temperature:\n    def __init__(self, celsius):\n        pass\n",
        "class Temperature:\n    def __init__(self, celsius):\n        self.celsius = celsius\n\n    @property\n    def celsius(self):\n        return self._celsius\n\n    @celsius.setter\n    def celsius(self, value):\n        if value < -273.15:\n            raise ValueError(\"below absolute zero\")\n        self._celsius = value\n\n    @property\n    def fahrenheit(self):\n        return self._celsius * 9 / 5 + 32\n\n    @classmethod\n    def from_fahrenheit(cls, f):\n        return cls((f - 32) * 5 / 9)\n",
        &["Temperature(100).fahrenheit == 212", "Temperature.from_fahrenheit(32).celsius == 0"]),
      settings: settings(),
      ..activity(KIND, 5, 2, "Properties and Class Methods: Temperature Converter",
        "Learn to use @property, setters and @classmethod to build a safe temperature type.",
        &["python", "class-builder", "properties", "intermediate"])
    },
    Activity {
      content: blueprint("Shape",
        "Build a Shape base class and Circle and Square subclasses that override area().",
        &["Shape.area() raises NotImplementedError", "Circle(radius).area() uses math.pi", "Square(side).area() returns side squared", "describe() in the base class uses area()"],
        "import math\n\nclass Shape:\n    pass\n",
        "import math\n\nclass Shape:\n    def area(self):\n        raise NotImplementedError\n\n    def describe(self):\n        return f\"{type(self).__name__} with area {self.area():.2f}\"\n\nclass Circle(Shape):\n    def __init__(self, radius):\n        self.radius = radius\n\n    def area(self):\n        return math.pi * self.radius ** 2\n\nclass Square(Shape):\n    def __init__(self, side):\n        self.side = side\n\n    def area(self):\n        return self.side ** 2\n",
        &["Square(3).area() == 9", "Square(1).describe() == \"Square with area 1.00\""]),
      settings: settings(),
      ..activity(KIND, 6, 2, "Inheritance and Polymorphism with Shapes",
        "Understand inheritance and method overriding by building a small shape hierarchy.",
        &["python", "class-builder", "inheritance", "polymorphism", "intermediate"])
    },
    Activity {
      content: blueprint("Vector",
        "Build a 2D Vector that supports +, == and abs().",
        &["__init__ takes x and y", "__add__ returns a new Vector", "__eq__ compares coordinates", "__abs__ returns the length", "__repr__ is Vector(x, y)"],
        "class Vector:\n    pass\n",
        "import math\n\nclass Vector:\n    def __init__(self, x, y):\n        self.x, self.y = x, y\n\n    def __add__(self, other):\n        return Vector(self.x + other.x, self.y + other.y)\n\n    def __eq__(self, other):\n        return (self.x, self.y) == (other.x, other.y)\n\n    def __abs__(self):\n        return math.hypot(self.x, self.y)\n\n    def __repr__(self):\n        return f\"Vector({self.x}, {self.y})\"\n",
        &["Vector(1, 2) + Vector(3, 4) == Vector(4, 6)", "abs(Vector(3, 4)) == 5"]),
      settings: settings(),
      ..activity(KIND, 7, 3, "Operator Overloading: Build a Vector Class",
        "Master special methods by making a Vector class work with Python operators.",
        &["python", "class-builder", "dunder-methods", "advanced"])
    },
    Activity {
      content: blueprint("Inventory",
        "Build an Inventory container that supports len(), in and iteration.",
        &["stores items in a dict of name to quantity", "add(name, qty) accumulates", "__len__ counts distinct items", "__contains__ checks names", "__iter__ yields names in insertion order"],
        "class Inventory:\n    pass\n",
        "class Inventory:\n    def __init__(self):\n        self._items = {}\n\n    def add(self, name, qty=1):\n        self._items[name] = self._items.get(name, 0) + qty\n\n    def __len__(self):\n        return len(self._items)\n\n    def __contains__(self, name):\n        return name in self._items\n\n    def __iter__(self):\n        return iter(self._items)\n",
        &["inv = Inventory(); inv.add(\"apple\"); \"apple\" in inv", "inv = Inventory(); inv.add(\"a\"); inv.add(\"a\"); len(inv) == 1"]),
      settings: settings(),
      ..activity(KIND, 8, 3, "Build a Custom Container Class",
        "Learn the container protocol by building an inventory that behaves like a built-in collection.",
        &["python", "class-builder", "protocols", "advanced", "data-structures"])
    },
    Activity {
      content: blueprint("Student",
        "Rebuild the Student class as a dataclass with ordering and a computed average.",
        &["use @dataclass(order=True)", "sort_index field excluded from init", "grades defaults to an empty list", "average() handles no grades", "__post_init__ sets sort_index"],
        "from dataclasses import dataclass, field\n\n@dataclass\nclass Student:\n    pass\n",
        "from dataclasses import dataclass, field\n\n@dataclass(order=True)\nclass Student:\n    sort_index: float = field(init=False, repr=False)\n    name: str = \"\"\n    grades: list = field(default_factory=list)\n\n    def __post_init__(self):\n        self.sort_index = self.average()\n\n    def average(self):\n        return sum(self.grades) / len(self.grades) if self.grades else 0.0\n",
        &["Student(\"A\", [90, 80]).average() == 85", "Student(\"A\", [50]) < Student(\"B\", [90])"]),
      settings: settings(),
      ..activity(KIND, 9, 4, "Mastering Python Dataclasses",
        "Master dataclasses, default factories and ordering by rebuilding a student record type.",
        &["python", "class-builder", "dataclasses", "expert"])
    },
    Activity {
      content: blueprint("PaymentProcessor",
        "Design an abstract PaymentProcessor and two concrete processors.",
        &["PaymentProcessor inherits from ABC", "pay(amount) is an abstractmethod", "CardProcessor charges a 2% fee", "WalletProcessor rejects amounts over its balance", "process_all(processors, amount) works with any processor"],
        "from abc import ABC, abstractmethod\n\nclass PaymentProcessor(ABC):\n    pass\n",
        "from abc import ABC, abstractmethod\n\nclass PaymentProcessor(ABC):\n    @abstractmethod\n    def pay(self, amount):\n        ...\n\nclass CardProcessor(PaymentProcessor):\n    def pay(self, amount):\n        return round(amount * 1.02, 2)\n\nclass WalletProcessor(PaymentProcessor):\n    def __init__(self, balance):\n        self.balance = balance\n\n    def pay(self, amount):\n        if amount > self.balance:\n            raise ValueError(\"insufficient balance\")\n        self.balance -= amount\n        return amount\n\ndef process_all(processors, amount):\n    return [p.pay(amount) for p in processors]\n",
        &["PaymentProcessor() raises TypeError", "CardProcessor().pay(100) == 102.0"]),
      settings: settings(),
      ..activity(KIND, 10, 4, "Ultimate Abstract Base Classes Design Challenge",
        "Learn to design interfaces with abc and understand how polymorphism keeps calling code simple.",
        &["python", "class-builder", "abstract-classes", "oop", "expert"])
    },
  ]
}
