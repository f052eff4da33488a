use crate::{
    CrossRef, Example, Examples, Language, PatternCategory, PatternName, PatternRecord,
    PrincipleCode,
};

fn examples(typescript: &'static str, php: &'static str, python: &'static str) -> Examples {
    Examples::new(vec![
        Example {
            language: Language::TypeScript,
            code: typescript,
        },
        Example {
            language: Language::PHP,
            code: php,
        },
        Example {
            language: Language::Python,
            code: python,
        },
    ])
}

pub fn patterns() -> Vec<PatternRecord> {
    vec![
        PatternRecord {
            name: PatternName::Factory,
            title: "Factory Pattern",
            description: "Creates objects without specifying the exact class of object that will be created.",
            category: PatternCategory::Creational,
            summary: "Creates objects without specifying the exact class of object that will be created",
            glossary: "Creational pattern for object creation",
            examples: examples(FACTORY_TS, FACTORY_PHP, FACTORY_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::OCP,
                    "Allows adding new product types without modifying existing factory code",
                ),
                CrossRef::new(
                    PrincipleCode::DIP,
                    "Depends on product abstractions rather than concrete classes",
                ),
            ],
        },
        PatternRecord {
            name: PatternName::Strategy,
            title: "Strategy Pattern",
            description: "Defines a family of algorithms, encapsulates each one, and makes them interchangeable at runtime.",
            category: PatternCategory::Behavioral,
            summary: "Defines a family of algorithms, encapsulates each one, and makes them interchangeable",
            glossary: "Behavioral pattern for algorithm selection",
            examples: examples(STRATEGY_TS, STRATEGY_PHP, STRATEGY_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::OCP,
                    "Allows adding new strategies without modifying the context",
                ),
                CrossRef::new(
                    PrincipleCode::DIP,
                    "Context depends on strategy abstraction, not implementations",
                ),
                CrossRef::new(
                    PrincipleCode::SRP,
                    "Each strategy has a single responsibility (algorithm)",
                ),
            ],
        },
        PatternRecord {
            name: PatternName::Decorator,
            title: "Decorator Pattern",
            description: "Attaches additional responsibilities to objects dynamically without modifying their structure.",
            category: PatternCategory::Structural,
            summary: "Attaches additional responsibilities to objects dynamically",
            glossary: "Structural pattern for extending functionality",
            examples: examples(DECORATOR_TS, DECORATOR_PHP, DECORATOR_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::OCP,
                    "Extends behavior without modifying original classes",
                ),
                CrossRef::new(
                    PrincipleCode::SRP,
                    "Each decorator has a single responsibility (feature)",
                ),
            ],
        },
        PatternRecord {
            name: PatternName::Observer,
            title: "Observer Pattern",
            description: "Defines a one-to-many dependency between objects so that when one object changes state, all its dependents are notified.",
            category: PatternCategory::Behavioral,
            summary: "Defines a one-to-many dependency so that when one object changes state, its dependents are notified",
            glossary: "Behavioral pattern for event notification",
            examples: examples(OBSERVER_TS, OBSERVER_PHP, OBSERVER_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::SRP,
                    "Separates the observable object from the observers",
                ),
                CrossRef::new(
                    PrincipleCode::OCP,
                    "New observers can be added without changing subject",
                ),
            ],
        },
        PatternRecord {
            name: PatternName::Adapter,
            title: "Adapter Pattern",
            description: "Allows objects with incompatible interfaces to collaborate by wrapping an object in an adapter to match another object's interface.",
            category: PatternCategory::Structural,
            summary: "Allows incompatible interfaces to work together",
            glossary: "Structural pattern for interface compatibility",
            examples: examples(ADAPTER_TS, ADAPTER_PHP, ADAPTER_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::OCP,
                    "Adapts interfaces without modifying original code",
                ),
                CrossRef::new(
                    PrincipleCode::ISP,
                    "Helps adapt large interfaces into smaller, specific ones",
                ),
                CrossRef::new(
                    PrincipleCode::LSP,
                    "Ensures adapted interface behaves as expected",
                ),
            ],
        },
        PatternRecord {
            name: PatternName::DependencyInjection,
            title: "Dependency Injection",
            description: "A technique where one object (or static method) supplies the dependencies of another object.",
            category: PatternCategory::Creational,
            summary: "Supplies the dependencies of an object from the outside instead of creating them inside",
            glossary: "Creational technique for supplying dependencies",
            examples: examples(DI_TS, DI_PHP, DI_PY),
            related_principles: vec![
                CrossRef::new(
                    PrincipleCode::DIP,
                    "Relies on abstractions rather than concrete implementations",
                ),
                CrossRef::new(
                    PrincipleCode::SRP,
                    "Separates object creation from business logic",
                ),
            ],
        },
    ]
}

const FACTORY_TS: &str = r#"// Factory Pattern Example
interface Product {
  operation(): string;
}

class ConcreteProductA implements Product {
  operation(): string {
    return "Product A created";
  }
}

class ConcreteProductB implements Product {
  operation(): string {
    return "Product B created";
  }
}

abstract class Creator {
  abstract factoryMethod(): Product;

  someOperation(): string {
    const product = this.factoryMethod();
    return product.operation();
  }
}

class ConcreteCreatorA extends Creator {
  factoryMethod(): Product {
    return new ConcreteProductA();
  }
}

class ConcreteCreatorB extends Creator {
  factoryMethod(): Product {
    return new ConcreteProductB();
  }
}"#;

const FACTORY_PHP: &str = r#"<?php
// Factory Pattern Example
interface Product
{
    public function operation(): string;
}

class ConcreteProductA implements Product
{
    public function operation(): string
    {
        return "Product A created";
    }
}

class ConcreteProductB implements Product
{
    public function operation(): string
    {
        return "Product B created";
    }
}

abstract class Creator
{
    abstract public function factoryMethod(): Product;

    public function someOperation(): string
    {
        $product = $this->factoryMethod();
        return $product->operation();
    }
}

class ConcreteCreatorA extends Creator
{
    public function factoryMethod(): Product
    {
        return new ConcreteProductA();
    }
}

class ConcreteCreatorB extends Creator
{
    public function factoryMethod(): Product
    {
        return new ConcreteProductB();
    }
}"#;

const FACTORY_PY: &str = r#"# Factory Pattern Example
from abc import ABC, abstractmethod


class Product(ABC):
    @abstractmethod
    def operation(self) -> str: ...


class ConcreteProductA(Product):
    def operation(self) -> str:
        return "Product A created"


class ConcreteProductB(Product):
    def operation(self) -> str:
        return "Product B created"


class Creator(ABC):
    @abstractmethod
    def factory_method(self) -> Product: ...

    def some_operation(self) -> str:
        product = self.factory_method()
        return product.operation()


class ConcreteCreatorA(Creator):
    def factory_method(self) -> Product:
        return ConcreteProductA()


class ConcreteCreatorB(Creator):
    def factory_method(self) -> Product:
        return ConcreteProductB()"#;

const STRATEGY_TS: &str = r#"// Strategy Pattern Example
interface Strategy {
  doAlgorithm(data: string[]): string[];
}

class ConcreteStrategyA implements Strategy {
  doAlgorithm(data: string[]): string[] {
    return data.sort();
  }
}

class ConcreteStrategyB implements Strategy {
  doAlgorithm(data: string[]): string[] {
    return data.reverse();
  }
}

class Context {
  private strategy: Strategy;

  constructor(strategy: Strategy) {
    this.strategy = strategy;
  }

  setStrategy(strategy: Strategy) {
    this.strategy = strategy;
  }

  executeStrategy(data: string[]): string[] {
    return this.strategy.doAlgorithm(data);
  }
}"#;

const STRATEGY_PHP: &str = r#"<?php
// Strategy Pattern Example
interface Strategy
{
    public function doAlgorithm(array $data): array;
}

class ConcreteStrategyA implements Strategy
{
    public function doAlgorithm(array $data): array
    {
        sort($data);
        return $data;
    }
}

class ConcreteStrategyB implements Strategy
{
    public function doAlgorithm(array $data): array
    {
        return array_reverse($data);
    }
}

class Context
{
    public function __construct(private Strategy $strategy)
    {
    }

    public function setStrategy(Strategy $strategy): void
    {
        $this->strategy = $strategy;
    }

    public function executeStrategy(array $data): array
    {
        return $this->strategy->doAlgorithm($data);
    }
}"#;

const STRATEGY_PY: &str = r#"# Strategy Pattern Example
from typing import Protocol


class Strategy(Protocol):
    def do_algorithm(self, data: list[str]) -> list[str]: ...


class ConcreteStrategyA:
    def do_algorithm(self, data: list[str]) -> list[str]:
        return sorted(data)


class ConcreteStrategyB:
    def do_algorithm(self, data: list[str]) -> list[str]:
        return list(reversed(data))


class Context:
    def __init__(self, strategy: Strategy) -> None:
        self._strategy = strategy

    def set_strategy(self, strategy: Strategy) -> None:
        self._strategy = strategy

    def execute_strategy(self, data: list[str]) -> list[str]:
        return self._strategy.do_algorithm(data)"#;

const DECORATOR_TS: &str = r#"// Decorator Pattern Example
interface Component {
  operation(): string;
}

class ConcreteComponent implements Component {
  operation(): string {
    return "ConcreteComponent";
  }
}

abstract class Decorator implements Component {
  protected component: Component;

  constructor(component: Component) {
    this.component = component;
  }

  operation(): string {
    return this.component.operation();
  }
}

class ConcreteDecoratorA extends Decorator {
  operation(): string {
    const result = super.operation();
    return `ConcreteDecoratorA(${result})`;
  }
}

class ConcreteDecoratorB extends Decorator {
  operation(): string {
    const result = super.operation();
    return `ConcreteDecoratorB(${result})`;
  }
}"#;

const DECORATOR_PHP: &str = r#"<?php
// Decorator Pattern Example
interface Component
{
    public function operation(): string;
}

class ConcreteComponent implements Component
{
    public function operation(): string
    {
        return "ConcreteComponent";
    }
}

abstract class Decorator implements Component
{
    public function __construct(protected Component $component)
    {
    }

    public function operation(): string
    {
        return $this->component->operation();
    }
}

class ConcreteDecoratorA extends Decorator
{
    public function operation(): string
    {
        return "ConcreteDecoratorA(" . parent::operation() . ")";
    }
}

class ConcreteDecoratorB extends Decorator
{
    public function operation(): string
    {
        return "ConcreteDecoratorB(" . parent::operation() . ")";
    }
}"#;

const DECORATOR_PY: &str = r#"# Decorator Pattern Example
class Component:
    def operation(self) -> str:
        raise NotImplementedError


class ConcreteComponent(Component):
    def operation(self) -> str:
        return "ConcreteComponent"


class Decorator(Component):
    def __init__(self, component: Component) -> None:
        self._component = component

    def operation(self) -> str:
        return self._component.operation()


class ConcreteDecoratorA(Decorator):
    def operation(self) -> str:
        return f"ConcreteDecoratorA({super().operation()})"


class ConcreteDecoratorB(Decorator):
    def operation(self) -> str:
        return f"ConcreteDecoratorB({super().operation()})""#;

const OBSERVER_TS: &str = r#"// Observer Pattern Example
interface Observer {
  update(subject: Subject): void;
}

interface Subject {
  attach(observer: Observer): void;
  detach(observer: Observer): void;
  notify(): void;
}

class ConcreteSubject implements Subject {
  private state: number = 0;
  private observers: Observer[] = [];

  attach(observer: Observer): void {
    this.observers.push(observer);
  }

  detach(observer: Observer): void {
    const index = this.observers.indexOf(observer);
    this.observers.splice(index, 1);
  }

  notify(): void {
    for (const observer of this.observers) {
      observer.update(this);
    }
  }

  setState(state: number): void {
    this.state = state;
    this.notify();
  }

  getState(): number {
    return this.state;
  }
}

class ConcreteObserverA implements Observer {
  update(subject: Subject): void {
    console.log("Observer A updated");
  }
}"#;

const OBSERVER_PHP: &str = r#"<?php
// Observer Pattern Example
interface Observer
{
    public function update(Subject $subject): void;
}

interface Subject
{
    public function attach(Observer $observer): void;
    public function detach(Observer $observer): void;
    public function notify(): void;
}

class ConcreteSubject implements Subject
{
    private int $state = 0;
    /** @var Observer[] */
    private array $observers = [];

    public function attach(Observer $observer): void
    {
        $this->observers[] = $observer;
    }

    public function detach(Observer $observer): void
    {
        $this->observers = array_values(
            array_filter($this->observers, fn ($o) => $o !== $observer)
        );
    }

    public function notify(): void
    {
        foreach ($this->observers as $observer) {
            $observer->update($this);
        }
    }

    public function setState(int $state): void
    {
        $this->state = $state;
        $this->notify();
    }

    public function getState(): int
    {
        return $this->state;
    }
}

class ConcreteObserverA implements Observer
{
    public function update(Subject $subject): void
    {
        echo "Observer A updated\n";
    }
}"#;

const OBSERVER_PY: &str = r#"# Observer Pattern Example
from __future__ import annotations


class Observer:
    def update(self, subject: Subject) -> None:
        raise NotImplementedError


class Subject:
    def __init__(self) -> None:
        self._state = 0
        self._observers: list[Observer] = []

    def attach(self, observer: Observer) -> None:
        self._observers.append(observer)

    def detach(self, observer: Observer) -> None:
        self._observers.remove(observer)

    def notify(self) -> None:
        for observer in self._observers:
            observer.update(self)

    @property
    def state(self) -> int:
        return self._state

    @state.setter
    def state(self, value: int) -> None:
        self._state = value
        self.notify()


class ConcreteObserverA(Observer):
    def update(self, subject: Subject) -> None:
        print("Observer A updated")"#;

const ADAPTER_TS: &str = r#"// Adapter Pattern Example
interface Target {
  request(): string;
}

class Adaptee {
  specificRequest(): string {
    return "Specific request from Adaptee";
  }
}

class Adapter implements Target {
  private adaptee: Adaptee;

  constructor(adaptee: Adaptee) {
    this.adaptee = adaptee;
  }

  request(): string {
    const result = this.adaptee.specificRequest();
    return `Adapter: (TRANSLATED) ${result}`;
  }
}

// Client code
function clientCode(target: Target) {
  return target.request();
}"#;

const ADAPTER_PHP: &str = r#"<?php
// Adapter Pattern Example
interface Target
{
    public function request(): string;
}

class Adaptee
{
    public function specificRequest(): string
    {
        return "Specific request from Adaptee";
    }
}

class Adapter implements Target
{
    public function __construct(private Adaptee $adaptee)
    {
    }

    public function request(): string
    {
        $result = $this->adaptee->specificRequest();
        return "Adapter: (TRANSLATED) {$result}";
    }
}

// Client code
function clientCode(Target $target): string
{
    return $target->request();
}"#;

const ADAPTER_PY: &str = r#"# Adapter Pattern Example
class Target:
    def request(self) -> str:
        raise NotImplementedError


class Adaptee:
    def specific_request(self) -> str:
        return "Specific request from Adaptee"


class Adapter(Target):
    def __init__(self, adaptee: Adaptee) -> None:
        self._adaptee = adaptee

    def request(self) -> str:
        result = self._adaptee.specific_request()
        return f"Adapter: (TRANSLATED) {result}"


# Client code
def client_code(target: Target) -> str:
    return target.request()"#;

const DI_TS: &str = r#"// Dependency Injection Example
interface Service {
  operate(): string;
}

class ConcreteService implements Service {
  operate(): string {
    return "Service operation";
  }
}

// Constructor injection
class Client {
  private service: Service;

  constructor(service: Service) {
    this.service = service; // Dependency is injected
  }

  doSomething(): string {
    return this.service.operate();
  }
}

// Usage
const service = new ConcreteService();
const client = new Client(service);
client.doSomething();"#;

const DI_PHP: &str = r#"<?php
// Dependency Injection Example
interface Service
{
    public function operate(): string;
}

class ConcreteService implements Service
{
    public function operate(): string
    {
        return "Service operation";
    }
}

// Constructor injection
class Client
{
    public function __construct(private Service $service)
    {
        // Dependency is injected
    }

    public function doSomething(): string
    {
        return $this->service->operate();
    }
}

// Usage
$service = new ConcreteService();
$client = new Client($service);
$client->doSomething();"#;

const DI_PY: &str = r#"# Dependency Injection Example
from typing import Protocol


class Service(Protocol):
    def operate(self) -> str: ...


class ConcreteService:
    def operate(self) -> str:
        return "Service operation"


# Constructor injection
class Client:
    def __init__(self, service: Service) -> None:
        self._service = service  # Dependency is injected

    def do_something(self) -> str:
        return self._service.operate()


# Usage
service = ConcreteService()
client = Client(service)
client.do_something()"#;
