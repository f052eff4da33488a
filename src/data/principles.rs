use crate::{CrossRef, Examples, PatternName, PrincipleCode, PrincipleRecord};

pub fn principles() -> Vec<PrincipleRecord> {
    vec![
        PrincipleRecord {
            code: PrincipleCode::SRP,
            title: "Single Responsibility Principle",
            description: "A class should have only one reason to change, meaning it should have only one responsibility or job.",
            summary: "A class should have only one reason to change",
            examples: Examples::typescript(SRP_TS),
            related_patterns: vec![
                CrossRef::new(
                    PatternName::Facade,
                    "Uses a facade to hide complex subsystems, letting each component focus on a single responsibility.",
                ),
                CrossRef::new(
                    PatternName::Observer,
                    "Separates the core object from observers that depend on it, promoting separation of concerns.",
                ),
            ],
        },
        PrincipleRecord {
            code: PrincipleCode::OCP,
            title: "Open/Closed Principle",
            description: "Software entities should be open for extension but closed for modification.",
            summary: "Software entities should be open for extension but closed for modification",
            examples: Examples::typescript(OCP_TS),
            related_patterns: vec![
                CrossRef::new(
                    PatternName::Strategy,
                    "Defines a family of algorithms, each encapsulated, making them interchangeable within clients.",
                ),
                CrossRef::new(
                    PatternName::Decorator,
                    "Allows behavior to be added to individual objects without affecting other objects of the same class.",
                ),
            ],
        },
        PrincipleRecord {
            code: PrincipleCode::LSP,
            title: "Liskov Substitution Principle",
            description: "Objects of a superclass should be replaceable with objects of its subclasses without affecting the correctness of the program.",
            summary: "Objects of a superclass should be replaceable with objects of its subclasses without breaking the application",
            examples: Examples::typescript(LSP_TS),
            related_patterns: vec![
                CrossRef::new(
                    PatternName::Factory,
                    "Creates objects without specifying the exact class, focusing on the interface not implementation.",
                ),
                CrossRef::new(
                    PatternName::Adapter,
                    "Allows classes with incompatible interfaces to work together through a middle-layer adapter.",
                ),
            ],
        },
        PrincipleRecord {
            code: PrincipleCode::ISP,
            title: "Interface Segregation Principle",
            description: "No client should be forced to depend on methods it does not use. Many specific interfaces are better than one general interface.",
            summary: "Many specific interfaces are better than one general interface",
            examples: Examples::typescript(ISP_TS),
            related_patterns: vec![
                CrossRef::new(
                    PatternName::Adapter,
                    "Can help adapt large interfaces into smaller ones that clients require.",
                ),
                CrossRef::new(
                    PatternName::Facade,
                    "Provides a simplified interface to a complex subsystem.",
                ),
            ],
        },
        PrincipleRecord {
            code: PrincipleCode::DIP,
            title: "Dependency Inversion Principle",
            description: "High-level modules should not depend on low-level modules. Both should depend on abstractions. Abstractions should not depend on details, but details should depend on abstractions.",
            summary: "High-level modules should not depend on low-level modules. Both should depend on abstractions",
            examples: Examples::typescript(DIP_TS),
            related_patterns: vec![
                CrossRef::new(
                    PatternName::DependencyInjection,
                    "A technique where one object supplies the dependencies of another object.",
                ),
                CrossRef::new(
                    PatternName::Factory,
                    "Creates objects through a common factory interface without specifying concrete classes.",
                ),
                CrossRef::new(
                    PatternName::Strategy,
                    "Defines a family of algorithms, encapsulating each one, and making them interchangeable.",
                ),
            ],
        },
    ]
}

const SRP_TS: &str = r#"// Bad - Multiple responsibilities
class User {
  constructor(name) { this.name = name; }

  getName() { return this.name; }
  saveToDatabase() { /* save user to DB */ }
  sendEmail() { /* send email logic */ }
}

// Good - Single responsibility
class User {
  constructor(name) { this.name = name; }
  getName() { return this.name; }
}

class UserRepository {
  saveUser(user) { /* save user to DB */ }
}

class EmailService {
  sendEmail(user, message) { /* send email logic */ }
}"#;

const OCP_TS: &str = r#"// Bad - Not extensible
class Rectangle {
  constructor(width, height) {
    this.width = width;
    this.height = height;
  }
}

class AreaCalculator {
  calculateArea(rectangle) {
    return rectangle.width * rectangle.height;
  }
  // Adding a new shape requires modifying this class
}

// Good - Open for extension
interface Shape {
  calculateArea(): number;
}

class Rectangle implements Shape {
  constructor(width, height) {
    this.width = width;
    this.height = height;
  }

  calculateArea() {
    return this.width * this.height;
  }
}

class Circle implements Shape {
  constructor(radius) {
    this.radius = radius;
  }

  calculateArea() {
    return Math.PI * this.radius * this.radius;
  }
}"#;

const LSP_TS: &str = r#"// Violates LSP
class Bird {
  fly() {
    console.log("Flying high!");
  }
}

class Penguin extends Bird {
  fly() {
    throw new Error("Cannot fly!"); // Breaks the contract
  }
}

// Follows LSP
interface Bird {
  move(): void;
}

class FlyingBird implements Bird {
  move() {
    this.fly();
  }

  fly() {
    console.log("Flying high!");
  }
}

class SwimmingBird implements Bird {
  move() {
    this.swim();
  }

  swim() {
    console.log("Swimming!");
  }
}"#;

const ISP_TS: &str = r#"// Violates ISP
interface Worker {
  work(): void;
  eat(): void;
  sleep(): void;
}

// Human workers need all methods
class HumanWorker implements Worker {
  work() { /* work */ }
  eat() { /* eat */ }
  sleep() { /* sleep */ }
}

// Robot only needs work, but forced to implement others
class RobotWorker implements Worker {
  work() { /* work */ }
  eat() { throw new Error("Robots don't eat!"); }
  sleep() { throw new Error("Robots don't sleep!"); }
}

// Follows ISP
interface Workable {
  work(): void;
}

interface Eatable {
  eat(): void;
}

interface Sleepable {
  sleep(): void;
}

class HumanWorker implements Workable, Eatable, Sleepable {
  work() { /* work */ }
  eat() { /* eat */ }
  sleep() { /* sleep */ }
}

class RobotWorker implements Workable {
  work() { /* work */ }
}"#;

const DIP_TS: &str = r#"// Violates DIP
class LightBulb {
  turnOn() {
    console.log("Bulb turned on");
  }

  turnOff() {
    console.log("Bulb turned off");
  }
}

class Switch {
  constructor(bulb) {
    this.bulb = bulb; // Directly depends on LightBulb
  }

  operate() {
    // Some logic to determine on or off
    this.bulb.turnOn();
  }
}

// Follows DIP
interface Switchable {
  turnOn(): void;
  turnOff(): void;
}

class LightBulb implements Switchable {
  turnOn() {
    console.log("Bulb turned on");
  }

  turnOff() {
    console.log("Bulb turned off");
  }
}

class Fan implements Switchable {
  turnOn() {
    console.log("Fan turned on");
  }

  turnOff() {
    console.log("Fan turned off");
  }
}

class Switch {
  constructor(device: Switchable) {
    this.device = device; // Depends on abstraction
  }

  operate() {
    // Some logic to determine on or off
    this.device.turnOn();
  }
}"#;

