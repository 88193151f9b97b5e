pub mod city;
